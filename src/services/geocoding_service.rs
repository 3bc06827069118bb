//! Proxy de geocoding
//!
//! Reenvía la consulta al servicio de geocoding de Mapbox y reduce la
//! respuesta a coordenadas + dirección formateada.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct GeocodingResponse {
    pub success: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub formatted_address: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl GeocodingResponse {
    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            latitude: None,
            longitude: None,
            formatted_address: None,
            message: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MapboxGeocodingResponse {
    features: Vec<MapboxFeature>,
}

#[derive(Debug, Deserialize)]
struct MapboxFeature {
    geometry: MapboxGeometry,
    properties: MapboxProperties,
}

#[derive(Debug, Deserialize)]
struct MapboxGeometry {
    coordinates: Vec<f64>, // [longitude, latitude]
}

#[derive(Debug, Deserialize)]
struct MapboxProperties {
    full_address: Option<String>,
    name: Option<String>,
    place_name: Option<String>,
}

pub struct GeocodingService {
    mapbox_token: String,
    client: reqwest::Client,
}

impl GeocodingService {
    pub fn new(mapbox_token: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            mapbox_token,
            client,
        })
    }

    pub async fn geocode(&self, query: &str) -> Result<GeocodingResponse> {
        log::info!("🗺️ Geocoding query: {}", query);

        let encoded_query = urlencoding::encode(query);

        let url = format!(
            "https://api.mapbox.com/search/geocode/v6/forward?q={}&access_token={}&limit=1",
            encoded_query, self.mapbox_token
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "RideshareBackend/1.0")
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Geocoding failed with status {}: {}", status, error_text);
            return Ok(GeocodingResponse::failure(format!(
                "Geocoding failed: {}",
                status
            )));
        }

        let response_text = response.text().await?;
        let mapbox_response = parse_mapbox_response(&response_text)?;

        if let Some(result) = first_coordinate(&mapbox_response) {
            log::info!(
                "✅ Geocoding successful: {} -> ({}, {})",
                query,
                result.0,
                result.1
            );
            return Ok(GeocodingResponse {
                success: true,
                latitude: Some(result.0),
                longitude: Some(result.1),
                formatted_address: result.2,
                message: Some("Geocoding successful".to_string()),
                error: None,
            });
        }

        log::warn!("⚠️ No coordinates found for query: {}", query);
        Ok(GeocodingResponse {
            success: false,
            latitude: None,
            longitude: None,
            formatted_address: None,
            message: Some("No coordinates found for this query".to_string()),
            error: None,
        })
    }
}

fn parse_mapbox_response(body: &str) -> Result<MapboxGeocodingResponse> {
    serde_json::from_str(body).map_err(|e| anyhow!("Failed to parse geocoding response: {}", e))
}

/// Extraer (lat, lng, dirección) de la primera feature
fn first_coordinate(response: &MapboxGeocodingResponse) -> Option<(f64, f64, Option<String>)> {
    let feature = response.features.first()?;
    if feature.geometry.coordinates.len() < 2 {
        return None;
    }

    let longitude = feature.geometry.coordinates[0];
    let latitude = feature.geometry.coordinates[1];

    let formatted_address = feature
        .properties
        .full_address
        .clone()
        .or_else(|| feature.properties.place_name.clone())
        .or_else(|| feature.properties.name.clone());

    Some((latitude, longitude, formatted_address))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [77.5946, 12.9716] },
                "properties": { "full_address": "Bengaluru, Karnataka, India", "name": "Bengaluru" }
            }
        ]
    }"#;

    #[test]
    fn test_parse_mapbox_response_extracts_first_feature() {
        let parsed = parse_mapbox_response(SAMPLE_RESPONSE).unwrap();
        let (lat, lng, address) = first_coordinate(&parsed).unwrap();

        assert_eq!(lat, 12.9716);
        assert_eq!(lng, 77.5946);
        assert_eq!(address.as_deref(), Some("Bengaluru, Karnataka, India"));
    }

    #[test]
    fn test_parse_mapbox_response_without_features() {
        let parsed = parse_mapbox_response(r#"{"features": []}"#).unwrap();
        assert!(first_coordinate(&parsed).is_none());
    }

    #[test]
    fn test_parse_mapbox_response_invalid_json() {
        assert!(parse_mapbox_response("not json").is_err());
    }
}
