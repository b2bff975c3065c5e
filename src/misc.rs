use anyhow::Result;

/// Selects the desktop languages for captions and button labels and, with the
/// `gtk` feature, initializes the relm4 components.
pub fn init() -> Result<()> {
    crate::localization::init();
    #[cfg(feature = "gtk")]
    mxl_relm4_components::init()?;

    Ok(())
}
