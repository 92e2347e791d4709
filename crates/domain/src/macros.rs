//! Macro for implementing Display and FromStr for plain domain enums
//!
//! Slots and config enums are stored as lowercase strings by the persistence
//! collaborator; this keeps their textual form in one place.
//!
//! # Example
//!
//! ```rust
//! use menuslot_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Surface {
//!     Public,
//!     Editor,
//! }
//!
//! impl_domain_enum_conversions!(Surface {
//!     Public => "public",
//!     Editor => "editor",
//! });
//!
//! assert_eq!(Surface::Editor.to_string(), "editor");
//! assert_eq!("PUBLIC".parse::<Surface>().unwrap(), Surface::Public);
//! ```

/// Implements Display and FromStr for a fieldless enum
///
/// - `Display` writes the mapped string verbatim
/// - `FromStr` matches case-insensitively and reports the enum name on failure
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
