pub(crate) mod device;
pub(crate) mod headphone;
pub(crate) mod mock;
