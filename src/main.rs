use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use car_rental_backend::cache::redis_client::RedisClient;
use car_rental_backend::cache::CacheConfig;
use car_rental_backend::config::environment::EnvironmentConfig;
use car_rental_backend::database::connection::mask_database_url;
use car_rental_backend::database::DatabaseConnection;
use car_rental_backend::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use car_rental_backend::routes::create_api_router;
use car_rental_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Car Rental Backend - Marketing + Back-office API");
    info!("===================================================");

    // Inicializar base de datos
    if let Ok(url) = std::env::var("DATABASE_URL") {
        info!("🗄️ Base de datos: {}", mask_database_url(&url));
    }

    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }

    let pool = db_connection.pool().clone();

    // Inicializar Redis y cache
    let redis_url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());

    let redis_config = CacheConfig {
        redis_url,
        default_ttl: 3600,
        max_connections: 10,
    };

    let redis_client = match RedisClient::new(redis_config).await {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Error conectando a Redis: {}", e);
            return Err(anyhow::anyhow!("Error de Redis: {}", e));
        }
    };

    // Crear router de la API
    let config = EnvironmentConfig::default();

    // En producción solo se aceptan los orígenes configurados
    let cors = if config.is_production() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let app_state = AppState::new(pool, config, redis_client);

    let app = create_api_router().layer(cors).with_state(app_state);

    // Puerto del servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📅 Endpoints - Booking:");
    info!("   POST /api/booking - Crear reserva");
    info!("   GET  /api/booking - Listar reservas");
    info!("   GET  /api/booking/availability - Comprobar disponibilidad");
    info!("   GET  /api/booking/:id - Obtener reserva");
    info!("   PUT  /api/booking/:id - Actualizar reserva");
    info!("   DELETE /api/booking/:id - Eliminar reserva");
    info!("   POST /api/booking/:id/forms - Enviar formulario entrega/recogida");
    info!("   GET  /api/booking/:id/forms - Listar formularios");
    info!("   POST /api/booking/:id/contract - Generar contrato");
    info!("   GET  /api/booking/:id/contract - Datos de contrato");
    info!("🚙 Endpoints - Vehicle:");
    info!("   POST /api/vehicle - Crear vehículo");
    info!("   GET  /api/vehicle - Listar vehículos (admin)");
    info!("   GET  /api/vehicle/catalog - Catálogo público");
    info!("   GET  /api/vehicle/categories - Categorías");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PUT  /api/vehicle/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo");
    info!("👤 Endpoints - Customer:");
    info!("   POST /api/customer - Crear cliente");
    info!("   GET  /api/customer - Listar clientes");
    info!("   GET  /api/customer/:id - Obtener cliente");
    info!("   PUT  /api/customer/:id - Actualizar cliente");
    info!("   DELETE /api/customer/:id - Eliminar cliente");
    info!("   POST /api/customer/:id/documents - Subir documento");
    info!("   GET  /api/customer/:id/documents - Listar documentos");
    info!("📄 Endpoints - Contract Template:");
    info!("   POST /api/contract-template - Crear plantilla");
    info!("   GET  /api/contract-template - Listar plantillas");
    info!("   POST /api/contract-template/preview - Vista previa");
    info!("   GET  /api/contract-template/:id - Obtener plantilla");
    info!("   PUT  /api/contract-template/:id - Actualizar plantilla");
    info!("   DELETE /api/contract-template/:id - Eliminar plantilla");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

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
