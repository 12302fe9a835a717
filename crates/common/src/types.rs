use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which hard-coded mesh the demo uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeshKind {
    /// Two triangles sharing an edge.
    #[default]
    Quad,
    /// A single colored triangle.
    Triangle,
}

impl fmt::Display for MeshKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quad => f.write_str("quad"),
            Self::Triangle => f.write_str("triangle"),
        }
    }
}

/// Error returned when parsing an unknown mesh name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mesh `{0}` (expected `quad` or `triangle`)")]
pub struct UnknownMesh(pub String);

impl FromStr for MeshKind {
    type Err = UnknownMesh;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quad" => Ok(Self::Quad),
            "triangle" | "tri" => Ok(Self::Triangle),
            other => Err(UnknownMesh(other.to_string())),
        }
    }
}

/// How directional move commands displace the eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveMode {
    /// Forward/backward along world Z, left/right along world X,
    /// regardless of where the camera looks.
    #[default]
    WorldAxes,
    /// Forward along the view direction, strafe along `view x up`.
    ViewRelative,
}

/// Which pointer axes mouse-look responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookMode {
    /// Horizontal motion yaws about the up vector; vertical motion is ignored.
    #[default]
    YawOnly,
    /// Yaw plus clamped pitch about the camera's right axis.
    YawPitch,
}
