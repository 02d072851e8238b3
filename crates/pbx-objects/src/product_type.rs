//! Product types
//!
//! The closed vocabulary of artifacts a target can produce. Each member is
//! backed by the reverse-DNS identifier stored in project files.

use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Kind of artifact a target produces
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum ProductType {
    #[strum(serialize = "com.apple.product-type.application")]
    Application,
    #[strum(serialize = "com.apple.product-type.framework")]
    Framework,
    #[strum(serialize = "com.apple.product-type.framework.static")]
    StaticFramework,
    #[strum(serialize = "com.apple.product-type.library.dynamic")]
    DynamicLibrary,
    #[strum(serialize = "com.apple.product-type.library.static")]
    StaticLibrary,
    #[strum(serialize = "com.apple.product-type.bundle")]
    Bundle,
    #[strum(serialize = "com.apple.product-type.bundle.unit-test")]
    UnitTestBundle,
    #[strum(serialize = "com.apple.product-type.bundle.ui-testing")]
    UiTestBundle,
    #[strum(serialize = "com.apple.product-type.bundle.ocunit-test")]
    OcUnitTestBundle,
    #[strum(serialize = "com.apple.product-type.app-extension")]
    AppExtension,
    #[strum(serialize = "com.apple.product-type.tool")]
    CommandLineTool,
    #[strum(serialize = "com.apple.product-type.application.watchapp")]
    WatchApp,
    #[strum(serialize = "com.apple.product-type.application.watchapp2")]
    Watch2App,
    #[strum(serialize = "com.apple.product-type.watchkit-extension")]
    WatchExtension,
    #[strum(serialize = "com.apple.product-type.watchkit2-extension")]
    Watch2Extension,
    #[strum(serialize = "com.apple.product-type.tv-app-extension")]
    TvExtension,
    #[strum(serialize = "com.apple.product-type.application.messages")]
    MessagesApplication,
    #[strum(serialize = "com.apple.product-type.app-extension.messages")]
    MessagesExtension,
    #[strum(serialize = "com.apple.product-type.app-extension.messages-sticker-pack")]
    StickerPack,
    #[strum(serialize = "com.apple.product-type.xpc-service")]
    XpcService,
    #[strum(serialize = "com.apple.product-type.xcode-extension")]
    XcodeExtension,
    #[strum(serialize = "com.apple.product-type.instruments-package")]
    InstrumentsPackage,
}

impl ProductType {
    /// Identifier as stored in project files
    #[inline]
    #[must_use]
    pub fn raw_value(self) -> &'static str {
        self.into()
    }

    /// Parse a raw identifier, exact match only
    #[inline]
    #[must_use]
    pub fn from_raw_value(raw: &str) -> Option<Self> {
        Self::from_str(raw).ok()
    }

    /// Every known product type
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Whether the product is a test bundle
    #[inline]
    #[must_use]
    pub fn is_test_bundle(self) -> bool {
        matches!(
            self,
            Self::UnitTestBundle | Self::UiTestBundle | Self::OcUnitTestBundle
        )
    }
}
