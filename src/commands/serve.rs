//! Serve-stub command - run the in-memory backend in the foreground

use todopro::server::StubServer;

/// Serve until the process is killed
pub fn serve_stub(addr: &str) -> anyhow::Result<()> {
    let server = StubServer::start(addr)?;
    println!("Stub backend listening on {}", server.base_url());
    println!("Press Ctrl+C to stop");
    server.wait();
    Ok(())
}
