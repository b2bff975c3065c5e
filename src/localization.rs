use i18n_embed::{
    fluent::{fluent_language_loader, FluentLanguageLoader},
    DefaultLocalizer, DesktopLanguageRequester, LanguageLoader, Localizer,
};
use log::*;
use once_cell::sync::Lazy;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();
    if let Err(error) = loader.load_fallback_language(&Localizations) {
        error!("Cannot load fallback language - {error:?}");
    }
    loader
});

pub mod helper {
    macro_rules! fl {
        ($message_id:literal) => {{
            i18n_embed_fl::fl!($crate::localization::LANGUAGE_LOADER, $message_id)
        }};

        ($message_id:literal, $($args:expr),*) => {{
            i18n_embed_fl::fl!($crate::localization::LANGUAGE_LOADER, $message_id, $($args), *)
        }};
    }

    pub(crate) use fl;
}

pub(crate) fn init() {
    let localizer = DefaultLocalizer::new(&*LANGUAGE_LOADER, &Localizations);
    let requested_languages = DesktopLanguageRequester::requested_languages();
    match localizer.select(&requested_languages) {
        Ok(languages) => debug!("Selected languages for message texts: {languages:?}"),
        Err(error) => error!("Cannot select message languages - {error}"),
    }
}
