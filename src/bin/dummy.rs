use chrono::Utc;

use week_planner::client::Client;
use week_planner::config::BASE_URL;
use week_planner::planner::Planner;

#[tokio::main]
async fn main() {
    env_logger::init();

    let base_url = std::env::var("PLANNER_API_URL")
        .unwrap_or_else(|_| BASE_URL.lock().unwrap().clone());

    let client = Client::new(&base_url).unwrap();
    match client.health().await {
        Ok(health) => println!("Backend at {} is {} (database: {})", base_url, health.status(), health.database()),
        Err(err) => println!("Backend at {} is unreachable: {}", base_url, err),
    }

    let planner = Planner::new(client);
    let today = Utc::now().date_naive();
    let week = planner.refresh(today).await.unwrap();
    week_planner::utils::print_week(&week);
}
