#[actix_web::main]
async fn main() -> std::io::Result<()> {
    town_registry_server::run().await
}
