//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg` and
//! serves `static/` over HTTP for local preview.

// The preview tooling only exists on the host; the wasm build is the library.
#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::process::{Command, Stdio};

    use anyhow::{bail, Context, Result};
    use clap::Parser;

    #[derive(Parser, Debug)]
    #[command(about = "Build and serve the shader showcase locally")]
    struct Args {
        /// Address the preview server listens on.
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        #[arg(long, default_value_t = 5933)]
        port: u16,

        /// Serve whatever is already in static/pkg.
        #[arg(long)]
        skip_build: bool,
    }

    fn build_wasm() -> Result<()> {
        println!("Building WASM pkg …");
        let status = Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
            .context(
                "wasm-pack not found in PATH. Install it from https://rustwasm.github.io/wasm-pack/",
            )?;
        if !status.success() {
            bail!("wasm-pack finished with errors");
        }
        Ok(())
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();

        if !args.skip_build {
            build_wasm()?;
        }

        println!("Serving static/ at http://{}:{} …", args.host, args.port);
        let status = Command::new("python3")
            .args(["-m", "http.server", &args.port.to_string()])
            .args(["--bind", &args.host, "--directory", "static"])
            .stdout(Stdio::null())
            .status()
            .context("failed to start python3 http.server")?;
        if !status.success() {
            bail!("http server exited with {status}");
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    host::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
