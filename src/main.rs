use std::net::{IpAddr, SocketAddr};

use frontend::{
    AppState, cache::UserCache, config::Config, infrastructure::BackendClient, router,
    session::SessionService,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    #[cfg(debug_assertions)]
    tracing::info!("Running in debug mode with CORS enabled");

    #[cfg(not(debug_assertions))]
    tracing::info!("Running in production mode with CORS disabled");

    // 用户缓存，进程启动时创建，随进程退出释放
    let cache = UserCache::from_config(&config).expect("Failed to create user cache");

    let backend = BackendClient::from_config(&config).expect("Failed to create backend client");
    tracing::info!("Proxying user lookups to {}", backend.base_url());

    let state = AppState::new(config.clone(), SessionService::new(cache, backend));
    let app = router::create_router(state);

    // 启动服务器
    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
