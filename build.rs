use std::env;
use std::fs;
use std::path::Path;

/// Claves de configuración que la app resuelve en tiempo de compilación
const ENV_KEYS: [&str; 3] = ["ROBOT_MANAGER_URL", "PUBSUB_URL", "PUBSUB_TOKEN"];

fn main() {
    // Cargar los backends desde .env si existe; si no, quedan las URLs de demo
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    // Solo se reenvían las claves conocidas, y sin pisar
                    // las que ya vengan del entorno
                    if ENV_KEYS.contains(&key) && env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using the demo backend URLs.");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
