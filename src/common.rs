pub use anyhow::{bail, Result};
pub use log::{debug, info, warn};
pub use regex::Regex;
pub use serde::{
    de::Error as DeserializeError, ser::Error as SerializeError, Deserialize, Deserializer,
    Serialize, Serializer,
};
pub use std::{
    borrow::Borrow,
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};
pub use tch::{
    nn::{self, Conv2D, ConvConfig},
    Device, Kind, Tensor,
};
