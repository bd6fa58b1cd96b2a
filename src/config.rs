use crate::common::*;

/// Runtime configuration.
///
/// The compute device and numeric precision are explicit here instead of
/// relying on the tensor library's process-wide defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub frame_channels: NonZeroUsize,
    #[serde(
        serialize_with = "serialize_device",
        deserialize_with = "deserialize_device",
        default = "default_device"
    )]
    pub device: Device,
    #[serde(
        serialize_with = "serialize_kind",
        deserialize_with = "deserialize_kind",
        default = "default_kind"
    )]
    pub kind: Kind,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }
}

fn default_device() -> Device {
    Device::cuda_if_available()
}

fn default_kind() -> Kind {
    Kind::Float
}

fn serialize_device<S>(device: &Device, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let text = match device {
        Device::Cpu => "cpu".into(),
        Device::Cuda(n) => format!("cuda({})", n),
    };
    text.serialize(serializer)
}

fn deserialize_device<'de, D>(deserializer: D) -> Result<Device, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let device = match text.as_str() {
        "cpu" => Device::Cpu,
        name => {
            let regex = Regex::new(r"^cuda\((\d+)\)$").unwrap();
            let captures = regex.captures(name).ok_or_else(|| {
                D::Error::custom(format!(r#"invalid device name "{}""#, name))
            })?;
            let index: usize = captures[1]
                .parse()
                .map_err(|err| D::Error::custom(format!("{:?}", err)))?;
            Device::Cuda(index)
        }
    };
    Ok(device)
}

fn serialize_kind<S>(kind: &Kind, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let text = match kind {
        Kind::Half => "half",
        Kind::Float => "float",
        Kind::Double => "double",
        _ => {
            return Err(S::Error::custom(format!(
                "unsupported tensor kind {:?}",
                kind
            )))
        }
    };
    text.serialize(serializer)
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<Kind, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let kind = match text.as_str() {
        "half" => Kind::Half,
        "float" => Kind::Float,
        "double" => Kind::Double,
        name => {
            return Err(D::Error::custom(format!(
                r#"invalid tensor kind "{}""#,
                name
            )))
        }
    };
    Ok(kind)
}
