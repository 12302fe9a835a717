use bytemuck::{Pod, Zeroable};
use quadview_common::MeshKind;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Hard-coded indexed geometry in the XY plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn for_kind(kind: MeshKind) -> Self {
        match kind {
            MeshKind::Quad => Self::quad(),
            MeshKind::Triangle => Self::triangle(),
        }
    }

    /// Unit quad built from two triangles sharing the BR-TL diagonal.
    pub fn quad() -> Self {
        #[rustfmt::skip]
        let vertices = vec![
            Vertex { position: [-0.5, -0.5, 0.0], color: [1.0, 0.0, 0.0] }, // bottom left
            Vertex { position: [ 0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0] }, // bottom right
            Vertex { position: [-0.5,  0.5, 0.0], color: [0.0, 0.0, 1.0] }, // top left
            Vertex { position: [ 0.5,  0.5, 0.0], color: [0.5, 0.5, 0.5] }, // top right
        ];
        Self {
            vertices,
            indices: vec![0, 1, 2, 2, 1, 3],
        }
    }

    pub fn triangle() -> Self {
        #[rustfmt::skip]
        let vertices = vec![
            Vertex { position: [-0.8, -0.8, 0.0], color: [1.0, 0.0, 0.0] },
            Vertex { position: [ 0.8, -0.8, 0.0], color: [0.0, 1.0, 0.0] },
            Vertex { position: [ 0.0,  0.8, 0.0], color: [0.0, 0.0, 1.0] },
        ];
        Self {
            vertices,
            indices: vec![0, 1, 2],
        }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Signed XY areas of each triangle; positive means counter-clockwise.
    pub fn triangle_areas(&self) -> Vec<f32> {
        self.indices
            .chunks_exact(3)
            .map(|tri| {
                let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| self.vertices[i as usize].position);
                0.5 * ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1]))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_two_triangles_over_four_vertices() {
        let quad = Mesh::quad();
        assert_eq!(quad.vertices.len(), 4);
        assert_eq!(quad.indices, vec![0, 1, 2, 2, 1, 3]);
        assert_eq!(quad.index_count(), 6);
    }

    #[test]
    fn triangles_are_counter_clockwise_and_cover_the_quad() {
        let areas = Mesh::quad().triangle_areas();
        assert_eq!(areas.len(), 2);
        assert!(areas.iter().all(|a| *a > 0.0));
        let total: f32 = areas.iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(Mesh::triangle().triangle_areas()[0] > 0.0);
    }

    #[test]
    fn indices_stay_in_bounds() {
        for kind in [MeshKind::Quad, MeshKind::Triangle] {
            let mesh = Mesh::for_kind(kind);
            assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
            assert_eq!(mesh.indices.len() % 3, 0);
        }
    }

    #[test]
    fn vertex_layout_matches_struct() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&Mesh::quad().vertices).len(), 96);
    }
}
