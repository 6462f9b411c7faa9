//! Macro generating the closed diagnostic catalog.
//!
//! [`declare_diags!`](crate::macros::declare_diags) takes the catalog table
//! (one entry per reportable condition with its code, severity, evidence
//! fields, and message parts) and generates:
//!
//! - one evidence struct per entry, with public fields;
//! - the [`Diag`](crate::Diag) sum type with one case per entry, so every
//!   dispatch over the catalog is compiler-checked for exhaustiveness;
//! - `parts()` constructors binding the declared fields into
//!   [`MessagePart`](crate::MessagePart)s in declared order;
//! - the static [`CATALOG`](crate::CATALOG) metadata table that the
//!   definition-time checks run against.
//!
//! Adding a diagnostic is one new table entry; nothing else changes.

/// Maps a part keyword (`error`, `warning`, `note`) to a [`PartSeverity`].
macro_rules! part_sev {
    (error) => {
        $crate::severity::PartSeverity::Error
    };
    (warning) => {
        $crate::severity::PartSeverity::Warning
    };
    (note) => {
        $crate::severity::PartSeverity::Note
    };
}

/// Converts one bound-arg token into a [`DiagArg`](crate::message::DiagArg).
///
/// A bare field name binds that field; `(a .. b)` binds the derived span
/// running from the start of field `a` to the end of field `b`, computed
/// here rather than stored on the evidence struct.
macro_rules! diag_arg {
    ($self:ident, ($a:ident .. $b:ident)) => {
        $crate::message::DiagArg::Span(
            ::sift_source::Span::from($self.$a).to(::sift_source::Span::from($self.$b)),
        )
    };
    ($self:ident, $f:ident) => {
        $crate::message::DiagArg::from($self.$f)
    };
}

/// Lists the field name(s) one bound-arg token references, for metadata.
macro_rules! arg_fields {
    (($a:ident .. $b:ident)) => {
        &[stringify!($a), stringify!($b)]
    };
    ($f:ident) => {
        &[stringify!($f)]
    };
}

/// Declares the full diagnostic catalog. See the module docs.
macro_rules! declare_diags {
    (
        $(
            $name:ident($code:literal, $sev:ident) {
                $( $field:ident: $fty:ty ),+ $(,)?
            } => [
                $( $psev:ident($template:literal $(, $arg:tt)* ) ),+ $(,)?
            ]
        ),+ $(,)?
    ) => {
        $(
            #[doc = concat!("Evidence for diagnostic `", $code, "`.")]
            #[derive(Clone, Copy, PartialEq, Eq, Debug, ::serde::Serialize, ::serde::Deserialize)]
            pub struct $name {
                $(
                    #[doc = "Evidence bound by this diagnostic's message parts."]
                    pub $field: $fty,
                )+
            }

            impl $name {
                #[doc = concat!("The stable short code of this diagnostic: `", $code, "`.")]
                pub const CODE: &'static str = $code;

                /// The fixed severity of this diagnostic.
                pub const SEVERITY: $crate::severity::Severity =
                    $crate::severity::Severity::$sev;

                /// Builds this diagnostic's message parts in declared order.
                pub fn parts(&self) -> Vec<$crate::message::MessagePart> {
                    vec![
                        $(
                            $crate::message::MessagePart::new(
                                $crate::macros::part_sev!($psev),
                                $template,
                                vec![ $( $crate::macros::diag_arg!(self, $arg) ),* ],
                            ),
                        )+
                    ]
                }
            }

            impl From<$name> for Diag {
                fn from(diag: $name) -> Self {
                    Diag::$name(diag)
                }
            }
        )+

        /// The closed catalog of every condition the analyzer can report.
        ///
        /// One case per reportable condition, each wrapping that condition's
        /// evidence struct. The catalog is closed for modification and open
        /// for extension: new conditions are added as new cases, and codes
        /// are never reused once released.
        #[derive(Clone, Copy, PartialEq, Eq, Debug, ::serde::Serialize, ::serde::Deserialize)]
        pub enum Diag {
            $(
                #[doc = concat!("`", $code, "`")]
                $name($name),
            )+
        }

        impl Diag {
            /// Returns the stable short code (`E` followed by three digits).
            pub fn code(&self) -> &'static str {
                match self {
                    $( Diag::$name(_) => $code, )+
                }
            }

            /// Returns the fixed severity of this diagnostic.
            pub fn severity(&self) -> $crate::severity::Severity {
                match self {
                    $( Diag::$name(_) => $crate::severity::Severity::$sev, )+
                }
            }

            /// Builds the message parts of this diagnostic in declared order.
            pub fn parts(&self) -> Vec<$crate::message::MessagePart> {
                match self {
                    $( Diag::$name(diag) => diag.parts(), )+
                }
            }
        }

        /// Definition-time metadata for every catalog entry, in declaration
        /// order. The catalog invariants (unique codes, in-range placeholder
        /// indices, declared fields exactly matching referenced fields) are
        /// checked against this table.
        pub static CATALOG: &[$crate::catalog::DiagInfo] = &[
            $(
                $crate::catalog::DiagInfo {
                    name: stringify!($name),
                    code: $code,
                    severity: $crate::severity::Severity::$sev,
                    fields: &[ $( stringify!($field) ),+ ],
                    parts: &[
                        $(
                            $crate::catalog::PartInfo {
                                severity: $crate::macros::part_sev!($psev),
                                template: $template,
                                args: &[ $( $crate::macros::arg_fields!($arg) ),* ],
                            },
                        )+
                    ],
                },
            )+
        ];
    };
}

pub(crate) use {arg_fields, declare_diags, diag_arg, part_sev};
