//! Static statement rules
//!
//! One [`StatementRule`] per statement kind, with substatement cardinalities
//! taken from the RFC 6020 grammar. Every rule that permits substatements
//! also permits any number of extension statements, except `revision`,
//! `import`, `include` and `belongs-to`.

use super::{ArgumentForm, BodyForm, Cardinality, ChildRule, Region, StatementRule};
use crate::syntax::StatementKind;
use crate::syntax::StatementKind::*;

const fn one(kind: StatementKind) -> ChildRule {
    ChildRule {
        kind,
        cardinality: Cardinality::ExactlyOne,
    }
}

const fn opt(kind: StatementKind) -> ChildRule {
    ChildRule {
        kind,
        cardinality: Cardinality::ZeroOrOne,
    }
}

const fn many(kind: StatementKind) -> ChildRule {
    ChildRule {
        kind,
        cardinality: Cardinality::ZeroOrMore,
    }
}

macro_rules! rules {
    ($($name:ident = $kind:ident($arg:ident, $body:ident) [$($child:expr),* $(,)?];)*) => {
        $(
            static $name: StatementRule = StatementRule {
                kind: $kind,
                argument: ArgumentForm::$arg,
                body: BodyForm::$body,
                children: &[$($child),*],
            };
        )*
    };
}

// =============================================================================
// MODULE STRUCTURE
// =============================================================================

rules! {
    MODULE = Module(Required, Block) [
        opt(YangVersion), one(Namespace), one(Prefix),
        many(Import), many(Include),
        opt(Organization), opt(Contact), opt(Description), opt(Reference),
        many(Revision),
        many(Extension), many(Feature), many(Identity), many(Typedef), many(Grouping),
        many(Container), many(Leaf), many(LeafList), many(List), many(Choice), many(Anyxml),
        many(Uses), many(Augment), many(Rpc), many(Notification), many(Deviation),
        many(UnknownExtension),
    ];
    SUBMODULE = Submodule(Required, Block) [
        opt(YangVersion), one(BelongsTo),
        many(Import), many(Include),
        opt(Organization), opt(Contact), opt(Description), opt(Reference),
        many(Revision),
        many(Extension), many(Feature), many(Identity), many(Typedef), many(Grouping),
        many(Container), many(Leaf), many(LeafList), many(List), many(Choice), many(Anyxml),
        many(Uses), many(Augment), many(Rpc), many(Notification), many(Deviation),
        many(UnknownExtension),
    ];
    BELONGS_TO = BelongsTo(Required, Block) [one(Prefix)];
    IMPORT = Import(Required, Block) [one(Prefix), opt(RevisionDate)];
    INCLUDE = Include(Required, Optional) [opt(RevisionDate)];
    REVISION = Revision(Required, Optional) [opt(Description), opt(Reference)];
}

// =============================================================================
// EXTENSIONS, FEATURES, IDENTITIES
// =============================================================================

rules! {
    EXTENSION = Extension(Required, Optional) [
        opt(Argument), opt(Status), opt(Description), opt(Reference), many(UnknownExtension),
    ];
    ARGUMENT = Argument(Required, Optional) [opt(YinElement), many(UnknownExtension)];
    IDENTITY = Identity(Required, Optional) [
        opt(Base), opt(Status), opt(Description), opt(Reference), many(UnknownExtension),
    ];
    FEATURE = Feature(Required, Optional) [
        many(IfFeature), opt(Status), opt(Description), opt(Reference), many(UnknownExtension),
    ];
    UNKNOWN = UnknownExtension(Optional, Optional) [many(UnknownExtension)];
}

// =============================================================================
// TYPES
// =============================================================================

rules! {
    TYPEDEF = Typedef(Required, NonEmptyBlock) [
        one(Type), opt(Units), opt(Default), opt(Status), opt(Description), opt(Reference),
        many(UnknownExtension),
    ];
    // Superset of every restriction shape; the shape rules in `type_body`
    // decide what one body may combine.
    TYPE = Type(Required, Optional) [
        opt(Range), opt(FractionDigits), opt(Length), many(Pattern), many(Enum), opt(Path),
        opt(Base), opt(RequireInstance), many(Bit), many(Type), many(UnknownExtension),
    ];
    RANGE = Range(Required, Optional) [
        opt(ErrorMessage), opt(ErrorAppTag), opt(Description), opt(Reference),
        many(UnknownExtension),
    ];
    LENGTH = Length(Required, Optional) [
        opt(ErrorMessage), opt(ErrorAppTag), opt(Description), opt(Reference),
        many(UnknownExtension),
    ];
    PATTERN = Pattern(Required, Optional) [
        opt(ErrorMessage), opt(ErrorAppTag), opt(Description), opt(Reference),
        many(UnknownExtension),
    ];
    ENUM = Enum(Required, Optional) [
        opt(Value), opt(Status), opt(Description), opt(Reference), many(UnknownExtension),
    ];
    BIT = Bit(Required, Optional) [
        opt(Position), opt(Status), opt(Description), opt(Reference), many(UnknownExtension),
    ];
}

// =============================================================================
// DATA NODE PROPERTIES
// =============================================================================

rules! {
    MUST = Must(Required, Optional) [
        opt(ErrorMessage), opt(ErrorAppTag), opt(Description), opt(Reference),
        many(UnknownExtension),
    ];
    WHEN = When(Required, Optional) [opt(Description), opt(Reference), many(UnknownExtension)];
}

// =============================================================================
// DATA DEFINITIONS
// =============================================================================

rules! {
    GROUPING = Grouping(Required, Optional) [
        opt(Status), opt(Description), opt(Reference),
        many(Typedef), many(Grouping),
        many(Container), many(Leaf), many(LeafList), many(List), many(Choice), many(Anyxml),
        many(Uses), many(UnknownExtension),
    ];
    CONTAINER = Container(Required, Optional) [
        opt(When), many(IfFeature), many(Must), opt(Presence), opt(Config), opt(Status),
        opt(Description), opt(Reference),
        many(Typedef), many(Grouping),
        many(Container), many(Leaf), many(LeafList), many(List), many(Choice), many(Anyxml),
        many(Uses), many(UnknownExtension),
    ];
    LEAF = Leaf(Required, Block) [
        opt(When), many(IfFeature), one(Type), opt(Units), many(Must), opt(Default),
        opt(Config), opt(Mandatory), opt(Status), opt(Description), opt(Reference),
        many(UnknownExtension),
    ];
    LEAF_LIST = LeafList(Required, Block) [
        opt(When), many(IfFeature), one(Type), opt(Units), many(Must), opt(Config),
        opt(MinElements), opt(MaxElements), opt(OrderedBy), opt(Status), opt(Description),
        opt(Reference), many(UnknownExtension),
    ];
    LIST = List(Required, NonEmptyBlock) [
        opt(When), many(IfFeature), many(Must), opt(Key), many(Unique), opt(Config),
        opt(MinElements), opt(MaxElements), opt(OrderedBy), opt(Status), opt(Description),
        opt(Reference),
        many(Typedef), many(Grouping),
        many(Container), many(Leaf), many(LeafList), many(List), many(Choice), many(Anyxml),
        many(Uses), many(UnknownExtension),
    ];
    CHOICE = Choice(Required, Optional) [
        opt(When), many(IfFeature), opt(Default), opt(Config), opt(Mandatory), opt(Status),
        opt(Description), opt(Reference),
        many(Case),
        many(Container), many(Leaf), many(LeafList), many(List), many(Anyxml),
        many(UnknownExtension),
    ];
    CASE = Case(Required, Optional) [
        opt(When), many(IfFeature), opt(Status), opt(Description), opt(Reference),
        many(Container), many(Leaf), many(LeafList), many(List), many(Choice), many(Anyxml),
        many(Uses), many(UnknownExtension),
    ];
    ANYXML = Anyxml(Required, Optional) [
        opt(When), many(IfFeature), many(Must), opt(Config), opt(Mandatory), opt(Status),
        opt(Description), opt(Reference), many(UnknownExtension),
    ];
    USES = Uses(Required, Optional) [
        opt(When), many(IfFeature), opt(Status), opt(Description), opt(Reference),
        many(Refine), many(Augment), many(UnknownExtension),
    ];
    REFINE = Refine(Required, Optional) [
        many(Must), opt(Presence), opt(Default), opt(Config), opt(Mandatory),
        opt(MinElements), opt(MaxElements), opt(Description), opt(Reference),
        many(UnknownExtension),
    ];
    AUGMENT = Augment(Required, NonEmptyBlock) [
        opt(When), many(IfFeature), opt(Status), opt(Description), opt(Reference),
        many(Container), many(Leaf), many(LeafList), many(List), many(Choice), many(Anyxml),
        many(Uses), many(Case), many(UnknownExtension),
    ];
}

// =============================================================================
// OPERATIONS
// =============================================================================

rules! {
    RPC = Rpc(Required, Optional) [
        many(IfFeature), opt(Status), opt(Description), opt(Reference),
        many(Typedef), many(Grouping), opt(Input), opt(Output), many(UnknownExtension),
    ];
    INPUT = Input(None, NonEmptyBlock) [
        many(Typedef), many(Grouping),
        many(Container), many(Leaf), many(LeafList), many(List), many(Choice), many(Anyxml),
        many(Uses), many(UnknownExtension),
    ];
    OUTPUT = Output(None, NonEmptyBlock) [
        many(Typedef), many(Grouping),
        many(Container), many(Leaf), many(LeafList), many(List), many(Choice), many(Anyxml),
        many(Uses), many(UnknownExtension),
    ];
    NOTIFICATION = Notification(Required, Optional) [
        many(IfFeature), opt(Status), opt(Description), opt(Reference),
        many(Typedef), many(Grouping),
        many(Container), many(Leaf), many(LeafList), many(List), many(Choice), many(Anyxml),
        many(Uses), many(UnknownExtension),
    ];
}

// =============================================================================
// DEVIATIONS
// =============================================================================

rules! {
    DEVIATION = Deviation(Required, NonEmptyBlock) [
        opt(Description), opt(Reference),
        many(DeviateNotSupported), many(DeviateAdd), many(DeviateReplace), many(DeviateDelete),
        many(UnknownExtension),
    ];
    DEVIATE_NOT_SUPPORTED = DeviateNotSupported(Required, Terminator) [opt(UnknownExtension)];
    DEVIATE_ADD = DeviateAdd(Required, Optional) [
        many(Units), many(Must), many(Unique), many(Default), many(Config), many(Mandatory),
        many(MinElements), many(MaxElements), many(UnknownExtension),
    ];
    DEVIATE_REPLACE = DeviateReplace(Required, Optional) [
        many(Type), many(Units), many(Default), many(Config), many(Mandatory),
        many(MinElements), many(MaxElements), many(UnknownExtension),
    ];
    DEVIATE_DELETE = DeviateDelete(Required, Optional) [
        many(Units), many(Must), many(Unique), many(Default), many(UnknownExtension),
    ];
}

// =============================================================================
// ARGUMENT-ONLY STATEMENTS
// =============================================================================

rules! {
    YANG_VERSION = YangVersion(Required, Terminator) [opt(UnknownExtension)];
    NAMESPACE = Namespace(Required, Terminator) [opt(UnknownExtension)];
    PREFIX = Prefix(Required, Terminator) [opt(UnknownExtension)];
    REVISION_DATE = RevisionDate(Required, Terminator) [opt(UnknownExtension)];
    ORGANIZATION = Organization(Required, Terminator) [opt(UnknownExtension)];
    CONTACT = Contact(Required, Terminator) [opt(UnknownExtension)];
    DESCRIPTION = Description(Required, Terminator) [opt(UnknownExtension)];
    REFERENCE = Reference(Required, Terminator) [opt(UnknownExtension)];
    YIN_ELEMENT = YinElement(Required, Terminator) [opt(UnknownExtension)];
    BASE = Base(Required, Terminator) [opt(UnknownExtension)];
    IF_FEATURE = IfFeature(Required, Terminator) [opt(UnknownExtension)];
    FRACTION_DIGITS = FractionDigits(Required, Terminator) [opt(UnknownExtension)];
    VALUE = Value(Required, Terminator) [opt(UnknownExtension)];
    PATH = Path(Required, Terminator) [opt(UnknownExtension)];
    REQUIRE_INSTANCE = RequireInstance(Required, Terminator) [opt(UnknownExtension)];
    POSITION = Position(Required, Terminator) [opt(UnknownExtension)];
    ERROR_MESSAGE = ErrorMessage(Required, Terminator) [opt(UnknownExtension)];
    ERROR_APP_TAG = ErrorAppTag(Required, Terminator) [opt(UnknownExtension)];
    UNITS = Units(Required, Terminator) [opt(UnknownExtension)];
    DEFAULT = Default(Required, Terminator) [opt(UnknownExtension)];
    STATUS = Status(Required, Terminator) [opt(UnknownExtension)];
    CONFIG = Config(Required, Terminator) [opt(UnknownExtension)];
    MANDATORY = Mandatory(Required, Terminator) [opt(UnknownExtension)];
    PRESENCE = Presence(Required, Terminator) [opt(UnknownExtension)];
    ORDERED_BY = OrderedBy(Required, Terminator) [opt(UnknownExtension)];
    MIN_ELEMENTS = MinElements(Required, Terminator) [opt(UnknownExtension)];
    MAX_ELEMENTS = MaxElements(Required, Terminator) [opt(UnknownExtension)];
    KEY = Key(Required, Terminator) [opt(UnknownExtension)];
    UNIQUE = Unique(Required, Terminator) [opt(UnknownExtension)];
}

/// The grammar rule for `kind`
pub fn rule(kind: StatementKind) -> &'static StatementRule {
    match kind {
        Module => &MODULE,
        Submodule => &SUBMODULE,
        YangVersion => &YANG_VERSION,
        Namespace => &NAMESPACE,
        Prefix => &PREFIX,
        BelongsTo => &BELONGS_TO,
        Import => &IMPORT,
        Include => &INCLUDE,
        RevisionDate => &REVISION_DATE,
        Organization => &ORGANIZATION,
        Contact => &CONTACT,
        Description => &DESCRIPTION,
        Reference => &REFERENCE,
        Revision => &REVISION,
        Extension => &EXTENSION,
        Argument => &ARGUMENT,
        YinElement => &YIN_ELEMENT,
        Identity => &IDENTITY,
        Base => &BASE,
        Feature => &FEATURE,
        IfFeature => &IF_FEATURE,
        Typedef => &TYPEDEF,
        Type => &TYPE,
        Range => &RANGE,
        FractionDigits => &FRACTION_DIGITS,
        Length => &LENGTH,
        Pattern => &PATTERN,
        Enum => &ENUM,
        Value => &VALUE,
        Path => &PATH,
        RequireInstance => &REQUIRE_INSTANCE,
        Bit => &BIT,
        Position => &POSITION,
        ErrorMessage => &ERROR_MESSAGE,
        ErrorAppTag => &ERROR_APP_TAG,
        Units => &UNITS,
        Default => &DEFAULT,
        Status => &STATUS,
        Config => &CONFIG,
        Mandatory => &MANDATORY,
        Presence => &PRESENCE,
        OrderedBy => &ORDERED_BY,
        Must => &MUST,
        When => &WHEN,
        MinElements => &MIN_ELEMENTS,
        MaxElements => &MAX_ELEMENTS,
        Key => &KEY,
        Unique => &UNIQUE,
        Grouping => &GROUPING,
        Container => &CONTAINER,
        Leaf => &LEAF,
        LeafList => &LEAF_LIST,
        List => &LIST,
        Choice => &CHOICE,
        Case => &CASE,
        Anyxml => &ANYXML,
        Uses => &USES,
        Refine => &REFINE,
        Augment => &AUGMENT,
        Rpc => &RPC,
        Input => &INPUT,
        Output => &OUTPUT,
        Notification => &NOTIFICATION,
        Deviation => &DEVIATION,
        DeviateNotSupported => &DEVIATE_NOT_SUPPORTED,
        DeviateAdd => &DEVIATE_ADD,
        DeviateReplace => &DEVIATE_REPLACE,
        DeviateDelete => &DEVIATE_DELETE,
        UnknownExtension => &UNKNOWN,
    }
}

/// The substatements `kind` permits, with their cardinalities
pub fn permitted_children(kind: StatementKind) -> &'static [ChildRule] {
    rule(kind).children
}

// =============================================================================
// MODULE / SUBMODULE REGIONS
// =============================================================================

const LINKAGE: &[StatementKind] = &[Import, Include];
const META: &[StatementKind] = &[Organization, Contact, Description, Reference];
const REVISIONS: &[StatementKind] = &[Revision];
const BODY: &[StatementKind] = &[
    Extension,
    Feature,
    Identity,
    Typedef,
    Grouping,
    Container,
    Leaf,
    LeafList,
    List,
    Choice,
    Anyxml,
    Uses,
    Augment,
    Rpc,
    Notification,
    Deviation,
    UnknownExtension,
];

static MODULE_REGIONS: [Region; 5] = [
    Region {
        name: "header",
        kinds: &[YangVersion, Namespace, Prefix],
    },
    Region {
        name: "linkage",
        kinds: LINKAGE,
    },
    Region {
        name: "meta",
        kinds: META,
    },
    Region {
        name: "revision",
        kinds: REVISIONS,
    },
    Region {
        name: "body",
        kinds: BODY,
    },
];

static SUBMODULE_REGIONS: [Region; 5] = [
    Region {
        name: "header",
        kinds: &[YangVersion, BelongsTo],
    },
    Region {
        name: "linkage",
        kinds: LINKAGE,
    },
    Region {
        name: "meta",
        kinds: META,
    },
    Region {
        name: "revision",
        kinds: REVISIONS,
    },
    Region {
        name: "body",
        kinds: BODY,
    },
];

/// The ordered body regions of a `module` or `submodule`. The first region
/// is the header, whose statements follow the order listed.
pub fn unit_regions(kind: StatementKind) -> &'static [Region] {
    match kind {
        Submodule => &SUBMODULE_REGIONS,
        _ => &MODULE_REGIONS,
    }
}
