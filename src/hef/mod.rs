pub mod block;
pub mod caps;
pub mod device;
pub mod error;
pub mod flash;
pub mod store;

#[cfg(test)]
mod test_support;

pub use caps::{ERASED_BYTE, HefCapabilities};
pub use device::{DeviceInfo, DeviceTable};
pub use error::ConfigError;
pub use flash::FlashDriver;
pub use store::HefStore;

pub mod prelude {
    pub use super::{
        ConfigError, DeviceInfo, DeviceTable, ERASED_BYTE, FlashDriver, HefCapabilities, HefStore,
    };
}
