//! Vector stroke shapes for the code-storm glyphs.
//!
//! Each glyph is a set of polylines inside a unit box centred on the origin
//! (height 1, width at most 0.8), drawn as a line-list mesh.

use std::collections::HashMap;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

type Stroke = &'static [[f32; 2]];

const ZERO: &[Stroke] = &[&[
    [0.0, 0.5],
    [0.22, 0.42],
    [0.3, 0.2],
    [0.3, -0.2],
    [0.22, -0.42],
    [0.0, -0.5],
    [-0.22, -0.42],
    [-0.3, -0.2],
    [-0.3, 0.2],
    [-0.22, 0.42],
    [0.0, 0.5],
]];
const ONE: &[Stroke] = &[
    &[[-0.15, 0.3], [0.05, 0.5], [0.05, -0.5]],
    &[[-0.2, -0.5], [0.3, -0.5]],
];
const LESS: &[Stroke] = &[&[[0.3, 0.4], [-0.3, 0.0], [0.3, -0.4]]];
const GREATER: &[Stroke] = &[&[[-0.3, 0.4], [0.3, 0.0], [-0.3, -0.4]]];
const BRACE_OPEN: &[Stroke] = &[&[
    [0.2, 0.5],
    [0.05, 0.45],
    [0.0, 0.3],
    [0.0, 0.1],
    [-0.2, 0.0],
    [0.0, -0.1],
    [0.0, -0.3],
    [0.05, -0.45],
    [0.2, -0.5],
]];
const BRACE_CLOSE: &[Stroke] = &[&[
    [-0.2, 0.5],
    [-0.05, 0.45],
    [0.0, 0.3],
    [0.0, 0.1],
    [0.2, 0.0],
    [0.0, -0.1],
    [0.0, -0.3],
    [-0.05, -0.45],
    [-0.2, -0.5],
]];
const SLASH: &[Stroke] = &[&[[-0.25, -0.5], [0.25, 0.5]]];
const STAR: &[Stroke] = &[
    &[[0.0, 0.3], [0.0, -0.3]],
    &[[-0.26, 0.15], [0.26, -0.15]],
    &[[-0.26, -0.15], [0.26, 0.15]],
];
const BROKEN_BAR: &[Stroke] = &[&[[0.0, 0.5], [0.0, 0.1]], &[[0.0, -0.1], [0.0, -0.5]]];
const BAR: &[Stroke] = &[&[[0.0, 0.5], [0.0, -0.5]]];
const BRACKET_OPEN: &[Stroke] = &[&[[0.15, 0.5], [-0.1, 0.5], [-0.1, -0.5], [0.15, -0.5]]];
const BRACKET_CLOSE: &[Stroke] = &[&[[-0.15, 0.5], [0.1, 0.5], [0.1, -0.5], [-0.15, -0.5]]];
const DELTA: &[Stroke] = &[&[[0.0, 0.5], [0.4, -0.45], [-0.4, -0.45], [0.0, 0.5]]];
const BOLT: &[Stroke] = &[&[
    [0.15, 0.5],
    [-0.2, -0.05],
    [0.1, -0.05],
    [-0.15, -0.5],
]];
const UNKNOWN: &[Stroke] = &[&[
    [-0.3, 0.5],
    [0.3, 0.5],
    [0.3, -0.5],
    [-0.3, -0.5],
    [-0.3, 0.5],
]];

/// Stroke shape for a glyph. Characters without a drawn shape render as an
/// outlined box.
pub fn glyph_strokes(glyph: char) -> &'static [Stroke] {
    match glyph {
        '0' => ZERO,
        '1' => ONE,
        '<' => LESS,
        '>' => GREATER,
        '{' => BRACE_OPEN,
        '}' => BRACE_CLOSE,
        '/' => SLASH,
        '*' => STAR,
        '¦' => BROKEN_BAR,
        '|' => BAR,
        '[' => BRACKET_OPEN,
        ']' => BRACKET_CLOSE,
        '∆' => DELTA,
        '⚡' => BOLT,
        _ => UNKNOWN,
    }
}

/// Vertex positions and line-list indices for a set of strokes.
pub fn stroke_geometry(strokes: &[Stroke]) -> (Vec<[f32; 3]>, Vec<u32>) {
    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for stroke in strokes {
        let start = positions.len() as u32;
        positions.extend(stroke.iter().map(|[x, y]| [*x, *y, 0.0]));
        for i in 1..stroke.len() as u32 {
            indices.extend_from_slice(&[start + i - 1, start + i]);
        }
    }

    (positions, indices)
}

pub fn glyph_mesh(glyph: char) -> Mesh {
    let (positions, indices) = stroke_geometry(glyph_strokes(glyph));

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// One mesh per distinct glyph, shared by every particle showing it.
#[derive(Resource, Default)]
pub struct GlyphMeshes(HashMap<char, Handle<Mesh>>);

impl GlyphMeshes {
    pub fn get_or_build(&mut self, glyph: char, meshes: &mut Assets<Mesh>) -> Handle<Mesh> {
        self.0
            .entry(glyph)
            .or_insert_with(|| meshes.add(glyph_mesh(glyph)))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
