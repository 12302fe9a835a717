use crate::error::{RenderError, RenderResult};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// Built-in vertex stage: transforms positions by the per-frame uniform.
pub const VERTEX_SHADER: &str = include_str!("shaders/vertex.wgsl");

/// Built-in fragment stage: outputs the interpolated vertex color.
pub const FRAGMENT_SHADER: &str = include_str!("shaders/fragment.wgsl");

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// File names looked up inside a shader directory.
pub const VERTEX_FILE: &str = "vertex.wgsl";
pub const FRAGMENT_FILE: &str = "fragment.wgsl";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// WGSL source for the vertex and fragment stages.
#[derive(Debug, Clone)]
pub struct ShaderSet {
    pub vertex: Cow<'static, str>,
    pub fragment: Cow<'static, str>,
}

impl Default for ShaderSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ShaderSet {
    pub fn builtin() -> Self {
        Self {
            vertex: Cow::Borrowed(VERTEX_SHADER),
            fragment: Cow::Borrowed(FRAGMENT_SHADER),
        }
    }

    /// Read `vertex.wgsl` and `fragment.wgsl` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> RenderResult<Self> {
        let dir = dir.as_ref();
        let read = |stage: ShaderStage, file: &str| {
            let path = dir.join(file);
            std::fs::read_to_string(&path)
                .map_err(|source| RenderError::ShaderLoad {
                    stage,
                    path,
                    source,
                })
        };
        let set = Self {
            vertex: Cow::Owned(read(ShaderStage::Vertex, VERTEX_FILE)?),
            fragment: Cow::Owned(read(ShaderStage::Fragment, FRAGMENT_FILE)?),
        };
        tracing::info!(dir = %dir.display(), "loaded shaders");
        Ok(set)
    }

    /// Shaders from `dir` when given, otherwise the built-in pair.
    pub fn from_dir(dir: Option<&Path>) -> RenderResult<Self> {
        match dir {
            Some(dir) => Self::load(dir),
            None => Ok(Self::builtin()),
        }
    }

    pub fn source(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

/// Compile one stage, capturing validation errors instead of letting the
/// device's uncaptured-error handler abort.
pub(crate) fn compile(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
) -> RenderResult<wgpu::ShaderModule> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(match stage {
            ShaderStage::Vertex => "vertex_shader",
            ShaderStage::Fragment => "fragment_shader",
        }),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    if let Some(err) = pollster::block_on(device.pop_error_scope()) {
        tracing::error!(%stage, "shader compilation failed: {err}");
        return Err(RenderError::ShaderCompilation {
            stage,
            message: err.to_string(),
        });
    }
    tracing::debug!(%stage, "shader compiled");
    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shaders_declare_entry_points() {
        let set = ShaderSet::builtin();
        assert!(set.vertex.contains(&format!("fn {VERTEX_ENTRY}(")));
        assert!(set.fragment.contains(&format!("fn {FRAGMENT_ENTRY}(")));
    }

    #[test]
    fn vertex_stage_reads_transform_uniform() {
        let vs = ShaderSet::builtin();
        let vs = vs.source(ShaderStage::Vertex);
        assert!(vs.contains("@group(0) @binding(0)"));
        assert!(vs.contains("uniforms.transform *"));
    }

    #[test]
    fn stage_interfaces_agree_on_color_location() {
        let set = ShaderSet::builtin();
        assert!(set.vertex.contains("@location(0) color: vec3<f32>"));
        assert!(set.fragment.contains("@location(0) color: vec3<f32>"));
    }

    #[test]
    fn load_reads_both_stages() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(VERTEX_FILE), "// vs").unwrap();
        std::fs::write(dir.path().join(FRAGMENT_FILE), "// fs").unwrap();

        let set = ShaderSet::load(dir.path()).unwrap();
        assert_eq!(set.vertex, "// vs");
        assert_eq!(set.fragment, "// fs");
    }

    #[test]
    fn missing_stage_names_stage_and_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(VERTEX_FILE), "// vs").unwrap();

        let err = ShaderSet::load(dir.path()).unwrap_err();
        match &err {
            RenderError::ShaderLoad { stage, path, .. } => {
                assert_eq!(*stage, ShaderStage::Fragment);
                assert!(path.ends_with(FRAGMENT_FILE));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("failed to read fragment shader"));
    }

    #[test]
    fn no_dir_means_builtin() {
        let set = ShaderSet::from_dir(None).unwrap();
        assert_eq!(set.vertex, VERTEX_SHADER);
    }
}
