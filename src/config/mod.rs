//! Client configuration.

use std::path::Path;
use std::{fs, io};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Root {
    /// Where and who to send as.
    pub client: Client,
    /// Wave animation parameters.
    pub animation: Animation,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    /// Effect server UDP address.
    pub addr: String,
    /// Nick to tag outgoing packets with.
    pub nick: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Animation {
    /// Number of lights to animate, ids 0..lightCount.
    pub light_count: u8,
    /// Phase added per frame, in radians.
    pub phase_step: f32,
    /// Time between frames.
    pub frame_millis: u64,
}

impl Default for Root {
    fn default() -> Root {
        Root {
            client: Client::default(),
            animation: Animation::default(),
        }
    }
}

impl Default for Client {
    fn default() -> Client {
        Client {
            addr: "valot.party:9909".to_string(),
            nick: "airzero".to_string(),
        }
    }
}

impl Default for Animation {
    fn default() -> Animation {
        Animation {
            light_count: 28,
            phase_step: 0.1,
            frame_millis: 50,
        }
    }
}

/// Load a configuration, picking the format from the file extension.
pub fn read_config<T: AsRef<Path>>(path: T) -> io::Result<Root> {
    match path.as_ref().extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => read_config_yaml(path),
        Some("json") => read_config_json(path),
        _ => {
            log::error!("Unknown config format: {:?}", path.as_ref());
            Err(io::Error::from(io::ErrorKind::InvalidInput))
        }
    }
}

pub fn read_config_yaml<T: AsRef<Path>>(path: T) -> io::Result<Root> {
    let file = fs::File::open(path)?;
    let reader = io::BufReader::new(file);
    serde_yaml::from_reader(reader).map_err(|err| {
        log::error!("Error reading config file: {:?}", err);
        io::Error::from(io::ErrorKind::InvalidData)
    })
}

pub fn read_config_json<T: AsRef<Path>>(path: T) -> io::Result<Root> {
    let file = fs::File::open(path)?;
    let reader = io::BufReader::new(file);
    serde_json::from_reader(reader).map_err(|err| {
        log::error!("Error reading config file: {:?}", err);
        io::Error::from(io::ErrorKind::InvalidData)
    })
}

/// Quick sanity check for the configuration.
///
/// Called after CLI overrides are merged in, so it covers both sources.
pub fn validate(root: &Root) -> io::Result<()> {
    // A zero byte would terminate the nick section early on the wire.
    if root.client.nick.is_empty() || root.client.nick.contains('\0') {
        log::error!("Invalid nick: {:?}", root.client.nick);
        return Err(io::Error::from(io::ErrorKind::InvalidData));
    }
    if root.animation.frame_millis == 0 {
        log::error!("Frame time must be nonzero");
        return Err(io::Error::from(io::ErrorKind::InvalidData));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_script() {
        let root = Root::default();
        assert_eq!(root.client.addr, "valot.party:9909");
        assert_eq!(root.animation.light_count, 28);
        assert!((root.animation.phase_step - 0.1).abs() < f32::EPSILON);
        assert_eq!(root.animation.frame_millis, 50);
    }

    #[test]
    fn parses_partial_yaml_with_defaults() {
        let yaml = "client:\n  addr: localhost:9909\n";
        let root: Root = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(root.client.addr, "localhost:9909");
        assert_eq!(root.client.nick, "airzero");
        assert_eq!(root.animation.light_count, 28);
    }

    #[test]
    fn parses_camel_case_animation_keys() {
        let yaml = "animation:\n  lightCount: 12\n  frameMillis: 100\n";
        let root: Root = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(root.animation.light_count, 12);
        assert_eq!(root.animation.frame_millis, 100);
    }

    #[test]
    fn rejects_bad_nicks() {
        let mut root = Root::default();
        root.client.nick = String::new();
        assert!(validate(&root).is_err());
        root.client.nick = "air\0zero".to_string();
        assert!(validate(&root).is_err());
        root.client.nick = "airzero".to_string();
        assert!(validate(&root).is_ok());
    }
}
