use bytemuck::{Pod, Zeroable};
use std::mem;

const R: [f32; 3] = [1.0, 0.0, 0.0];
const G: [f32; 3] = [0.0, 1.0, 0.0];
const B: [f32; 3] = [0.0, 0.0, 1.0];
const SKY: [f32; 3] = [0.5, 0.5, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
#[allow(non_snake_case)]
pub struct Vertex {
    a_Pos: [f32; 3],
    a_Color: [f32; 3],
}

/// One float attribute inside the interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub location: u32,
    pub components: i32,
    pub offset: i32,
}

impl Vertex {
    pub const STRIDE: i32 = mem::size_of::<Vertex>() as i32;

    pub const ATTRIBUTES: [Attribute; 2] = [
        Attribute {
            location: 0,
            components: 3,
            offset: 0,
        },
        Attribute {
            location: 1,
            components: 3,
            offset: 3 * mem::size_of::<f32>() as i32,
        },
    ];
}

pub const QUAD: [Vertex; 4] = [
    // top right
    Vertex {
        a_Pos: [0.5, 0.5, 0.0],
        a_Color: R,
    },
    // bottom right
    Vertex {
        a_Pos: [0.5, -0.5, 0.0],
        a_Color: G,
    },
    // bottom left
    Vertex {
        a_Pos: [-0.5, -0.5, 0.0],
        a_Color: B,
    },
    // top left
    Vertex {
        a_Pos: [-0.5, 0.5, 0.0],
        a_Color: SKY,
    },
];

pub const INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        let [pos, color] = Vertex::ATTRIBUTES;
        assert_eq!((pos.location, pos.components, pos.offset), (0, 3, 0));
        assert_eq!((color.location, color.components, color.offset), (1, 3, 12));
        assert!(color.offset + color.components * 4 <= Vertex::STRIDE);
    }

    #[test]
    fn bytes_are_tightly_packed() {
        let bytes: &[u8] = bytemuck::cast_slice(&QUAD);
        assert_eq!(bytes.len(), QUAD.len() * Vertex::STRIDE as usize);

        let floats: &[f32] = bytemuck::cast_slice(&QUAD[..1]);
        assert_eq!(floats, &[0.5, 0.5, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn indices_form_two_triangles_over_the_quad() {
        assert_eq!(INDICES.len() % 3, 0);
        assert!(INDICES.iter().all(|&i| (i as usize) < QUAD.len()));
        // the shared edge is 1-3
        let (first, second) = INDICES.split_at(3);
        assert!(first.contains(&1) && first.contains(&3));
        assert!(second.contains(&1) && second.contains(&3));
    }
}
