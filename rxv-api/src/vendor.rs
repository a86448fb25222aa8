//! Narrow receiver interface consumed by device sessions

use crate::operations::BasicStatus;
use crate::Result;

/// Named receiver commands, independent of how they travel on the wire.
///
/// [`RxvClient`](crate::RxvClient) implements this over a
/// [`TransportClient`](control_client::TransportClient); sessions only ever see
/// this trait.
pub trait VendorClient: Send + Sync {
    /// Read power, volume, mute and input in one request
    fn basic_status(&self) -> Result<BasicStatus>;

    fn power(&self) -> Result<bool> {
        Ok(self.basic_status()?.power.is_on())
    }

    fn set_power(&self, on: bool) -> Result<()>;

    /// Current volume in dB
    fn volume_db(&self) -> Result<f64> {
        Ok(self.basic_status()?.volume_db)
    }

    /// Write a volume in dB; the receiver clamps it to its own range
    fn set_volume_db(&self, db: f64) -> Result<()>;

    fn muted(&self) -> Result<bool> {
        Ok(self.basic_status()?.muted)
    }

    fn set_muted(&self, muted: bool) -> Result<()>;

    fn model_name(&self) -> Result<String>;

    /// Small device icon served by the receiver, if its host is known
    fn small_image_url(&self) -> Option<String>;
}

impl<V: VendorClient + ?Sized> VendorClient for Box<V> {
    fn basic_status(&self) -> Result<BasicStatus> {
        (**self).basic_status()
    }

    fn power(&self) -> Result<bool> {
        (**self).power()
    }

    fn set_power(&self, on: bool) -> Result<()> {
        (**self).set_power(on)
    }

    fn volume_db(&self) -> Result<f64> {
        (**self).volume_db()
    }

    fn set_volume_db(&self, db: f64) -> Result<()> {
        (**self).set_volume_db(db)
    }

    fn muted(&self) -> Result<bool> {
        (**self).muted()
    }

    fn set_muted(&self, muted: bool) -> Result<()> {
        (**self).set_muted(muted)
    }

    fn model_name(&self) -> Result<String> {
        (**self).model_name()
    }

    fn small_image_url(&self) -> Option<String> {
        (**self).small_image_url()
    }
}
