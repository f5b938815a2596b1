//! Statement kinds for the YANG statement tree
//!
//! One variant per RFC 6020 statement keyword. `deviate` is split by its
//! argument into four kinds because each form has its own repertoire.
//! Statements whose keyword is not a core YANG keyword are
//! [`StatementKind::UnknownExtension`].

use std::fmt;

/// All statement kinds that can appear in a YANG statement tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatementKind {
    // =========================================================================
    // MODULE STRUCTURE
    // =========================================================================
    Module,
    Submodule,
    YangVersion,
    Namespace,
    Prefix,
    BelongsTo,
    Import,
    Include,
    RevisionDate,

    // =========================================================================
    // META
    // =========================================================================
    Organization,
    Contact,
    Description,
    Reference,
    Revision,

    // =========================================================================
    // EXTENSIONS, FEATURES, IDENTITIES
    // =========================================================================
    Extension,
    Argument,
    YinElement,
    Identity,
    Base,
    Feature,
    IfFeature,

    // =========================================================================
    // TYPES
    // =========================================================================
    Typedef,
    Type,
    Range,
    FractionDigits,
    Length,
    Pattern,
    Enum,
    Value,
    Path,
    RequireInstance,
    Bit,
    Position,
    ErrorMessage,
    ErrorAppTag,

    // =========================================================================
    // DATA NODE PROPERTIES
    // =========================================================================
    Units,
    Default,
    Status,
    Config,
    Mandatory,
    Presence,
    OrderedBy,
    Must,
    When,
    MinElements,
    MaxElements,
    Key,
    Unique,

    // =========================================================================
    // DATA DEFINITIONS
    // =========================================================================
    Grouping,
    Container,
    Leaf,
    LeafList,
    List,
    Choice,
    Case,
    Anyxml,
    Uses,
    Refine,
    Augment,

    // =========================================================================
    // OPERATIONS
    // =========================================================================
    Rpc,
    Input,
    Output,
    Notification,

    // =========================================================================
    // DEVIATIONS
    // =========================================================================
    Deviation,
    DeviateNotSupported,
    DeviateAdd,
    DeviateReplace,
    DeviateDelete,

    /// A statement whose keyword is not a core YANG keyword
    UnknownExtension,
}

impl StatementKind {
    /// The YANG keyword for this kind.
    ///
    /// The four deviate forms all share `deviate`; extension statements have
    /// no fixed keyword and report `"<extension>"`.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Submodule => "submodule",
            Self::YangVersion => "yang-version",
            Self::Namespace => "namespace",
            Self::Prefix => "prefix",
            Self::BelongsTo => "belongs-to",
            Self::Import => "import",
            Self::Include => "include",
            Self::RevisionDate => "revision-date",
            Self::Organization => "organization",
            Self::Contact => "contact",
            Self::Description => "description",
            Self::Reference => "reference",
            Self::Revision => "revision",
            Self::Extension => "extension",
            Self::Argument => "argument",
            Self::YinElement => "yin-element",
            Self::Identity => "identity",
            Self::Base => "base",
            Self::Feature => "feature",
            Self::IfFeature => "if-feature",
            Self::Typedef => "typedef",
            Self::Type => "type",
            Self::Range => "range",
            Self::FractionDigits => "fraction-digits",
            Self::Length => "length",
            Self::Pattern => "pattern",
            Self::Enum => "enum",
            Self::Value => "value",
            Self::Path => "path",
            Self::RequireInstance => "require-instance",
            Self::Bit => "bit",
            Self::Position => "position",
            Self::ErrorMessage => "error-message",
            Self::ErrorAppTag => "error-app-tag",
            Self::Units => "units",
            Self::Default => "default",
            Self::Status => "status",
            Self::Config => "config",
            Self::Mandatory => "mandatory",
            Self::Presence => "presence",
            Self::OrderedBy => "ordered-by",
            Self::Must => "must",
            Self::When => "when",
            Self::MinElements => "min-elements",
            Self::MaxElements => "max-elements",
            Self::Key => "key",
            Self::Unique => "unique",
            Self::Grouping => "grouping",
            Self::Container => "container",
            Self::Leaf => "leaf",
            Self::LeafList => "leaf-list",
            Self::List => "list",
            Self::Choice => "choice",
            Self::Case => "case",
            Self::Anyxml => "anyxml",
            Self::Uses => "uses",
            Self::Refine => "refine",
            Self::Augment => "augment",
            Self::Rpc => "rpc",
            Self::Input => "input",
            Self::Output => "output",
            Self::Notification => "notification",
            Self::Deviation => "deviation",
            Self::DeviateNotSupported
            | Self::DeviateAdd
            | Self::DeviateReplace
            | Self::DeviateDelete => "deviate",
            Self::UnknownExtension => "<extension>",
        }
    }

    /// Human-readable name used in diagnostics (`deviate add`, `leaf-list`, ...)
    pub fn display_name(self) -> &'static str {
        match self {
            Self::DeviateNotSupported => "deviate not-supported",
            Self::DeviateAdd => "deviate add",
            Self::DeviateReplace => "deviate replace",
            Self::DeviateDelete => "deviate delete",
            Self::UnknownExtension => "extension statement",
            other => other.keyword(),
        }
    }

    /// Resolve the argument of a `deviate` statement to its kind
    pub fn from_deviate_argument(argument: &str) -> Option<Self> {
        match argument {
            "not-supported" => Some(Self::DeviateNotSupported),
            "add" => Some(Self::DeviateAdd),
            "replace" => Some(Self::DeviateReplace),
            "delete" => Some(Self::DeviateDelete),
            _ => None,
        }
    }

    /// `data-def-stmt`: container, leaf, leaf-list, list, choice, anyxml, uses
    pub fn is_data_definition(self) -> bool {
        matches!(
            self,
            Self::Container
                | Self::Leaf
                | Self::LeafList
                | Self::List
                | Self::Choice
                | Self::Anyxml
                | Self::Uses
        )
    }

    /// Data definitions allowed as a shorthand case directly inside `choice`
    pub fn is_short_case(self) -> bool {
        matches!(
            self,
            Self::Container | Self::Leaf | Self::LeafList | Self::List | Self::Anyxml
        )
    }

    pub fn is_deviate(self) -> bool {
        matches!(
            self,
            Self::DeviateNotSupported | Self::DeviateAdd | Self::DeviateReplace | Self::DeviateDelete
        )
    }

    /// Top-level compilation unit (`module` or `submodule`)
    pub fn is_unit(self) -> bool {
        matches!(self, Self::Module | Self::Submodule)
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
