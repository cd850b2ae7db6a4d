#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    akta_ajb_server::run().await
}
