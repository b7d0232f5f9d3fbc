//! Built-in rules.

pub mod prefer_box_as_tag;

pub use prefer_box_as_tag::{
    DISCRIMINATOR_PROP, PreferBoxAsTag, SUPPORTED_HTML_TAGS, TARGET_COMPONENT, TARGET_MODULE,
    TraversalContext,
};
