use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use rideshare_backend::config::environment::EnvironmentConfig;
use rideshare_backend::database;
use rideshare_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Rideshare Coordination Backend");
    info!("=================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Aplicar el schema (idempotente)
    if let Err(e) = database::schema::apply_schema(&pool).await {
        error!("❌ Error aplicando el schema: {}", e);
        return Err(e);
    }
    info!("✅ Schema aplicado");

    let addr: SocketAddr = config.server_addr().parse()?;
    let app = rideshare_backend::build_app(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   POST   /api/signup - Registro de usuario");
    info!("   POST   /api/login - Login");
    info!("   PUT    /api/update-profile - Actualizar perfil");
    info!("   POST   /api/offer-ride - Publicar viaje");
    info!("   GET    /api/search-rides - Buscar viajes por destino");
    info!("   GET    /api/ride-details - Geometría de un viaje");
    info!("   GET    /api/my-offered-rides - Viajes publicados por el usuario");
    info!("   DELETE /api/ride/:ride_id - Cerrar viaje y archivar historial");
    info!("   POST   /api/boarding-point - Registrar punto de embarque");
    info!("   GET    /api/boarding-points - Puntos de embarque de un viaje");
    info!("   GET    /api/my-boarded-rides - Viajes en los que el usuario se sube");
    info!("   POST   /api/ride-location - Actualizar posición del conductor");
    info!("   GET    /api/ride-location - Última posición del conductor");
    info!("   GET    /api/history - Historial del usuario");
    info!("   GET    /api/income - Resumen de ingresos del conductor");
    info!("   GET    /api/income-charts - Series para gráficas de ingresos");
    info!("   GET    /api/geocode - Proxy de geocoding");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
