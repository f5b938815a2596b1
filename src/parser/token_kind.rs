//! Token kinds produced by a token source
//!
//! One variant per YANG keyword plus identifiers, strings and the four
//! punctuation tokens of the statement grammar.

use crate::syntax::StatementKind;

/// All token kinds seen by the statement parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,  // keyword position: non-core keyword, e.g. `ext:annotation`
    STRING, // argument: quoted or unquoted string

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    PLUS,      // +
    L_BRACE,   // {
    R_BRACE,   // }
    SEMICOLON, // ;

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ANYXML_KW,
    ARGUMENT_KW,
    AUGMENT_KW,
    BASE_KW,
    BELONGS_TO_KW,
    BIT_KW,
    CASE_KW,
    CHOICE_KW,
    CONFIG_KW,
    CONTACT_KW,
    CONTAINER_KW,
    DEFAULT_KW,
    DESCRIPTION_KW,
    DEVIATE_KW,
    DEVIATION_KW,
    ENUM_KW,
    ERROR_APP_TAG_KW,
    ERROR_MESSAGE_KW,
    EXTENSION_KW,
    FEATURE_KW,
    FRACTION_DIGITS_KW,
    GROUPING_KW,
    IDENTITY_KW,
    IF_FEATURE_KW,
    IMPORT_KW,
    INCLUDE_KW,
    INPUT_KW,
    KEY_KW,
    LEAF_KW,
    LEAF_LIST_KW,
    LENGTH_KW,
    LIST_KW,
    MANDATORY_KW,
    MAX_ELEMENTS_KW,
    MIN_ELEMENTS_KW,
    MODULE_KW,
    MUST_KW,
    NAMESPACE_KW,
    NOTIFICATION_KW,
    ORDERED_BY_KW,
    ORGANIZATION_KW,
    OUTPUT_KW,
    PATH_KW,
    PATTERN_KW,
    POSITION_KW,
    PREFIX_KW,
    PRESENCE_KW,
    RANGE_KW,
    REFERENCE_KW,
    REFINE_KW,
    REQUIRE_INSTANCE_KW,
    REVISION_KW,
    REVISION_DATE_KW,
    RPC_KW,
    STATUS_KW,
    SUBMODULE_KW,
    TYPE_KW,
    TYPEDEF_KW,
    UNIQUE_KW,
    UNITS_KW,
    USES_KW,
    VALUE_KW,
    WHEN_KW,
    YANG_VERSION_KW,
    YIN_ELEMENT_KW,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    EOF,
    ERROR, // unlexable input
}

impl TokenKind {
    /// Look up the keyword token for a word in statement position
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        use TokenKind::*;
        let kind = match text {
            "anyxml" => ANYXML_KW,
            "argument" => ARGUMENT_KW,
            "augment" => AUGMENT_KW,
            "base" => BASE_KW,
            "belongs-to" => BELONGS_TO_KW,
            "bit" => BIT_KW,
            "case" => CASE_KW,
            "choice" => CHOICE_KW,
            "config" => CONFIG_KW,
            "contact" => CONTACT_KW,
            "container" => CONTAINER_KW,
            "default" => DEFAULT_KW,
            "description" => DESCRIPTION_KW,
            "deviate" => DEVIATE_KW,
            "deviation" => DEVIATION_KW,
            "enum" => ENUM_KW,
            "error-app-tag" => ERROR_APP_TAG_KW,
            "error-message" => ERROR_MESSAGE_KW,
            "extension" => EXTENSION_KW,
            "feature" => FEATURE_KW,
            "fraction-digits" => FRACTION_DIGITS_KW,
            "grouping" => GROUPING_KW,
            "identity" => IDENTITY_KW,
            "if-feature" => IF_FEATURE_KW,
            "import" => IMPORT_KW,
            "include" => INCLUDE_KW,
            "input" => INPUT_KW,
            "key" => KEY_KW,
            "leaf" => LEAF_KW,
            "leaf-list" => LEAF_LIST_KW,
            "length" => LENGTH_KW,
            "list" => LIST_KW,
            "mandatory" => MANDATORY_KW,
            "max-elements" => MAX_ELEMENTS_KW,
            "min-elements" => MIN_ELEMENTS_KW,
            "module" => MODULE_KW,
            "must" => MUST_KW,
            "namespace" => NAMESPACE_KW,
            "notification" => NOTIFICATION_KW,
            "ordered-by" => ORDERED_BY_KW,
            "organization" => ORGANIZATION_KW,
            "output" => OUTPUT_KW,
            "path" => PATH_KW,
            "pattern" => PATTERN_KW,
            "position" => POSITION_KW,
            "prefix" => PREFIX_KW,
            "presence" => PRESENCE_KW,
            "range" => RANGE_KW,
            "reference" => REFERENCE_KW,
            "refine" => REFINE_KW,
            "require-instance" => REQUIRE_INSTANCE_KW,
            "revision" => REVISION_KW,
            "revision-date" => REVISION_DATE_KW,
            "rpc" => RPC_KW,
            "status" => STATUS_KW,
            "submodule" => SUBMODULE_KW,
            "type" => TYPE_KW,
            "typedef" => TYPEDEF_KW,
            "unique" => UNIQUE_KW,
            "units" => UNITS_KW,
            "uses" => USES_KW,
            "value" => VALUE_KW,
            "when" => WHEN_KW,
            "yang-version" => YANG_VERSION_KW,
            "yin-element" => YIN_ELEMENT_KW,
            _ => return None,
        };
        Some(kind)
    }

    /// Statement kind introduced by this token in statement position.
    ///
    /// Identifiers introduce extension statements. `deviate` returns `None`:
    /// its kind depends on the argument that follows.
    pub fn statement_kind(self) -> Option<StatementKind> {
        use StatementKind as S;
        use TokenKind::*;
        let kind = match self {
            IDENT => S::UnknownExtension,
            ANYXML_KW => S::Anyxml,
            ARGUMENT_KW => S::Argument,
            AUGMENT_KW => S::Augment,
            BASE_KW => S::Base,
            BELONGS_TO_KW => S::BelongsTo,
            BIT_KW => S::Bit,
            CASE_KW => S::Case,
            CHOICE_KW => S::Choice,
            CONFIG_KW => S::Config,
            CONTACT_KW => S::Contact,
            CONTAINER_KW => S::Container,
            DEFAULT_KW => S::Default,
            DESCRIPTION_KW => S::Description,
            DEVIATION_KW => S::Deviation,
            ENUM_KW => S::Enum,
            ERROR_APP_TAG_KW => S::ErrorAppTag,
            ERROR_MESSAGE_KW => S::ErrorMessage,
            EXTENSION_KW => S::Extension,
            FEATURE_KW => S::Feature,
            FRACTION_DIGITS_KW => S::FractionDigits,
            GROUPING_KW => S::Grouping,
            IDENTITY_KW => S::Identity,
            IF_FEATURE_KW => S::IfFeature,
            IMPORT_KW => S::Import,
            INCLUDE_KW => S::Include,
            INPUT_KW => S::Input,
            KEY_KW => S::Key,
            LEAF_KW => S::Leaf,
            LEAF_LIST_KW => S::LeafList,
            LENGTH_KW => S::Length,
            LIST_KW => S::List,
            MANDATORY_KW => S::Mandatory,
            MAX_ELEMENTS_KW => S::MaxElements,
            MIN_ELEMENTS_KW => S::MinElements,
            MODULE_KW => S::Module,
            MUST_KW => S::Must,
            NAMESPACE_KW => S::Namespace,
            NOTIFICATION_KW => S::Notification,
            ORDERED_BY_KW => S::OrderedBy,
            ORGANIZATION_KW => S::Organization,
            OUTPUT_KW => S::Output,
            PATH_KW => S::Path,
            PATTERN_KW => S::Pattern,
            POSITION_KW => S::Position,
            PREFIX_KW => S::Prefix,
            PRESENCE_KW => S::Presence,
            RANGE_KW => S::Range,
            REFERENCE_KW => S::Reference,
            REFINE_KW => S::Refine,
            REQUIRE_INSTANCE_KW => S::RequireInstance,
            REVISION_KW => S::Revision,
            REVISION_DATE_KW => S::RevisionDate,
            RPC_KW => S::Rpc,
            STATUS_KW => S::Status,
            SUBMODULE_KW => S::Submodule,
            TYPE_KW => S::Type,
            TYPEDEF_KW => S::Typedef,
            UNIQUE_KW => S::Unique,
            UNITS_KW => S::Units,
            USES_KW => S::Uses,
            VALUE_KW => S::Value,
            WHEN_KW => S::When,
            YANG_VERSION_KW => S::YangVersion,
            YIN_ELEMENT_KW => S::YinElement,
            DEVIATE_KW | STRING | PLUS | L_BRACE | R_BRACE | SEMICOLON | EOF | ERROR => {
                return None;
            }
        };
        Some(kind)
    }

    pub fn is_keyword(self) -> bool {
        !matches!(
            self,
            TokenKind::IDENT
                | TokenKind::STRING
                | TokenKind::PLUS
                | TokenKind::L_BRACE
                | TokenKind::R_BRACE
                | TokenKind::SEMICOLON
                | TokenKind::EOF
                | TokenKind::ERROR
        )
    }

    /// Tokens that can start a statement argument
    pub fn is_argument(self) -> bool {
        matches!(self, TokenKind::STRING | TokenKind::IDENT)
    }

    /// Human-readable name for diagnostics
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::IDENT => "identifier",
            TokenKind::STRING => "string",
            TokenKind::PLUS => "'+'",
            TokenKind::L_BRACE => "'{'",
            TokenKind::R_BRACE => "'}'",
            TokenKind::SEMICOLON => "';'",
            TokenKind::EOF => "end of input",
            TokenKind::ERROR => "invalid token",
            TokenKind::DEVIATE_KW => "keyword 'deviate'",
            keyword => match keyword.statement_kind() {
                Some(kind) => kind.keyword(),
                None => "keyword",
            },
        }
    }
}
