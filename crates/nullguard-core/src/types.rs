use serde::{Deserialize, Serialize};

use crate::hash::member_hash;

/// The shape of a guarded member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Constructor,
    Method,
    PropertyGetter,
    PropertySetter,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Constructor => "constructor",
            MemberKind::Method => "method",
            MemberKind::PropertyGetter => "property_getter",
            MemberKind::PropertySetter => "property_setter",
        }
    }

    pub fn is_property(&self) -> bool {
        matches!(self, MemberKind::PropertyGetter | MemberKind::PropertySetter)
    }

    /// Infer the kind of a plain (non-constructor) member from its raw name.
    /// `get_X` and `set_X` are property accessors, anything else is a method.
    pub fn from_accessor_name(raw_name: &str) -> Self {
        if raw_name.starts_with(GETTER_PREFIX) {
            MemberKind::PropertyGetter
        } else if raw_name.starts_with(SETTER_PREFIX) {
            MemberKind::PropertySetter
        } else {
            MemberKind::Method
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const GETTER_PREFIX: &str = "get_";
const SETTER_PREFIX: &str = "set_";

/// Strip the `get_`/`set_` prefix from a property accessor name.
/// Non-accessor names are returned unchanged.
pub fn accessor_display_name(raw_name: &str) -> &str {
    raw_name
        .strip_prefix(GETTER_PREFIX)
        .or_else(|| raw_name.strip_prefix(SETTER_PREFIX))
        .unwrap_or(raw_name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    NonPublic,
}

/// How a parameter moves data across the call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterDirection {
    /// Passed by value into the member.
    #[default]
    In,
    /// Written by the member, never read on entry.
    Out,
    /// Passed by reference: read on entry and written back on exit.
    InOut,
}

/// Extracted metadata of a single declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Zero-based declaration index.
    pub position: usize,
    pub name: String,
    #[serde(default)]
    pub direction: ParameterDirection,
    #[serde(default)]
    pub is_optional: bool,
    /// Non-nullable value types can never hold null and are exempt.
    #[serde(default)]
    pub is_value_type: bool,
    /// An explicit nullability annotation is present.
    #[serde(default)]
    pub allows_null: bool,
}

impl ParameterDescriptor {
    /// A plain by-value reference-typed parameter with no annotations.
    pub fn new(position: usize, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
            direction: ParameterDirection::In,
            is_optional: false,
            is_value_type: false,
            allows_null: false,
        }
    }

    pub fn out(position: usize, name: impl Into<String>) -> Self {
        Self {
            direction: ParameterDirection::Out,
            ..Self::new(position, name)
        }
    }

    pub fn by_ref(position: usize, name: impl Into<String>) -> Self {
        Self {
            direction: ParameterDirection::InOut,
            ..Self::new(position, name)
        }
    }

    pub fn nullable(mut self) -> Self {
        self.allows_null = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn value_type(mut self) -> Self {
        self.is_value_type = true;
        self
    }

    /// True for by-reference parameters the member writes back.
    pub fn is_output(&self) -> bool {
        matches!(
            self.direction,
            ParameterDirection::Out | ParameterDirection::InOut
        )
    }

    /// True for parameters whose value is read on entry.
    pub fn is_input(&self) -> bool {
        !matches!(self.direction, ParameterDirection::Out)
    }

    /// Signature token carrying every flag the policy reads:
    /// `[out |ref ]name[: value][?][=]`.
    pub fn token(&self) -> String {
        let mut token = match self.direction {
            ParameterDirection::In => String::new(),
            ParameterDirection::Out => "out ".to_string(),
            ParameterDirection::InOut => "ref ".to_string(),
        };
        token.push_str(&self.name);
        if self.is_value_type {
            token.push_str(": value");
        }
        if self.allows_null {
            token.push('?');
        }
        if self.is_optional {
            token.push('=');
        }
        token
    }
}

/// Stable identity of a member, used as the plan cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable metadata of a guarded member, extracted once by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Host-provided signature, e.g. `Sample::some_method(nonNullArg, nullArg?)`.
    /// Builders generate it from the raw name and parameter tokens.
    pub signature: String,
    /// Display name. For property accessors, the property name.
    pub name: String,
    pub kind: MemberKind,
    pub visibility: Visibility,
    pub parameters: Vec<ParameterDescriptor>,
    pub returns_value: bool,
    #[serde(default)]
    pub return_allows_null: bool,
}

impl MemberDescriptor {
    pub fn constructor(owner: &str, parameters: Vec<ParameterDescriptor>) -> Self {
        Self::build(owner, "new", "new", MemberKind::Constructor, parameters, false)
    }

    /// A method; `returns_value` is false for members returning nothing.
    pub fn method(
        owner: &str,
        name: &str,
        parameters: Vec<ParameterDescriptor>,
        returns_value: bool,
    ) -> Self {
        Self::build(owner, name, name, MemberKind::Method, parameters, returns_value)
    }

    /// A member named the way the host reports it: `get_X`/`set_X` become
    /// accessors of property `X`, anything else is a method.
    pub fn from_raw_name(
        owner: &str,
        raw_name: &str,
        parameters: Vec<ParameterDescriptor>,
        returns_value: bool,
    ) -> Self {
        let kind = MemberKind::from_accessor_name(raw_name);
        let name = accessor_display_name(raw_name);
        Self::build(owner, raw_name, name, kind, parameters, returns_value)
    }

    /// A property getter. Accepts either the property name or `get_<name>`.
    pub fn getter(owner: &str, property: &str) -> Self {
        let property = accessor_display_name(property);
        let raw = format!("{GETTER_PREFIX}{property}");
        Self::build(owner, &raw, property, MemberKind::PropertyGetter, Vec::new(), true)
    }

    /// A property setter taking a single `value` parameter.
    /// Accepts either the property name or `set_<name>`.
    pub fn setter(owner: &str, property: &str, value: ParameterDescriptor) -> Self {
        let property = accessor_display_name(property);
        let raw = format!("{SETTER_PREFIX}{property}");
        Self::build(
            owner,
            &raw,
            property,
            MemberKind::PropertySetter,
            vec![value],
            false,
        )
    }

    fn build(
        owner: &str,
        raw_name: &str,
        name: &str,
        kind: MemberKind,
        parameters: Vec<ParameterDescriptor>,
        returns_value: bool,
    ) -> Self {
        let params: Vec<String> = parameters.iter().map(ParameterDescriptor::token).collect();
        Self {
            signature: format!("{owner}::{raw_name}({})", params.join(", ")),
            name: name.to_string(),
            kind,
            visibility: Visibility::Public,
            parameters,
            returns_value,
            return_allows_null: false,
        }
    }

    pub fn non_public(mut self) -> Self {
        self.visibility = Visibility::NonPublic;
        self
    }

    /// Mark the return value (or getter result) as annotated nullable.
    pub fn nullable_return(mut self) -> Self {
        self.return_allows_null = true;
        self
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = signature.into();
        self
    }

    /// Identity used for plan caching: the signature plus the member's shape,
    /// so two members can only share an id when they resolve identically.
    pub fn id(&self) -> MemberId {
        MemberId(member_hash(&self.signature, &self.shape()))
    }

    fn shape(&self) -> String {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|p| format!("{}:{}", p.position, p.token()))
            .collect();
        format!(
            "{}|{:?}|{}|{}|{}",
            self.kind.as_str(),
            self.visibility,
            self.returns_value,
            self.return_allows_null,
            params.join(",")
        )
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn parameter(&self, position: usize) -> Option<&ParameterDescriptor> {
        self.parameters.iter().find(|p| p.position == position)
    }
}
