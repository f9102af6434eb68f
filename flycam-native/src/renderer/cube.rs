use super::mesh::{CpuMesh, Vertex};

//
// ──────────────────────────────────────────────────────────────
//   Axis-aligned cube spanning ±1 (edge length 2), Y-up
//   right-hand rule
//
//   24 vertices (4 per face) so each face carries its own flat
//   normal and a full 0..1 uv tile.
// ──────────────────────────────────────────────────────────────
//

pub fn cube_mesh() -> CpuMesh
{
  let mut vertices = Vec::with_capacity(24);
  let mut indices = Vec::with_capacity(36);

  let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
    // normal,            corners (counter-clockwise seen from outside)
    (
      [0.0, 0.0, 1.0], // front (Z+)
      [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    ),
    (
      [0.0, 0.0, -1.0], // back (Z-)
      [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]],
    ),
    (
      [1.0, 0.0, 0.0], // right (X+)
      [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]],
    ),
    (
      [-1.0, 0.0, 0.0], // left (X-)
      [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
    ),
    (
      [0.0, 1.0, 0.0], // top (Y+)
      [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
    ),
    (
      [0.0, -1.0, 0.0], // bottom (Y-)
      [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
    ),
  ];

  let uvs: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

  for (normal, corners) in faces
  {
    let base = vertices.len() as u32;

    for (corner, uv) in corners.iter().zip(uvs)
    {
      vertices.push(Vertex { position: *corner, normal, uv });
    }

    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
  }

  CpuMesh { vertices, indices }
}

//
// ──────────────────────────────────────────────────────────────
//   Tests
// ──────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn cube_has_four_vertices_per_face()
  {
    let cube = cube_mesh();

    assert_eq!(cube.vertices.len(), 24);
    assert_eq!(cube.indices.len(), 36);
  }

  #[test]
  fn indices_stay_in_range()
  {
    let cube = cube_mesh();

    assert!(cube.indices.iter().all(|&i| (i as usize) < cube.vertices.len()));
  }

  #[test]
  fn normals_are_unit_axis_vectors()
  {
    let cube = cube_mesh();

    for vertex in &cube.vertices
    {
      let n = vertex.normal;
      let length_sq = n[0] * n[0] + n[1] * n[1] + n[2] * n[2];

      assert_eq!(length_sq, 1.0);
      assert_eq!(n.iter().filter(|c| **c != 0.0).count(), 1);
    }
  }

  #[test]
  fn default_spawn_sees_front_faces()
  {
    use crate::config::DemoConfig;
    use glam::Vec3;

    let eye = DemoConfig::default().camera.pose.position;

    // the eye must start outside the ±1 extents, or back-face culling
    // leaves nothing but the clear colour
    assert!(eye.abs().max_element() > 1.0);

    let cube = cube_mesh();
    let visible = cube
      .indices
      .chunks(3)
      .filter(|tri| {
        let a = Vec3::from(cube.vertices[tri[0] as usize].position);
        let b = Vec3::from(cube.vertices[tri[1] as usize].position);
        let c = Vec3::from(cube.vertices[tri[2] as usize].position);

        // counter-clockwise winding faces the eye when the triangle
        // normal points toward it
        (b - a).cross(c - a).dot(eye - a) > 0.0
      })
      .count();

    assert!(visible > 0);
  }

  #[test]
  fn normals_point_away_from_centre()
  {
    let cube = cube_mesh();

    for vertex in &cube.vertices
    {
      let dot = vertex.position[0] * vertex.normal[0]
        + vertex.position[1] * vertex.normal[1]
        + vertex.position[2] * vertex.normal[2];

      assert!(dot > 0.0);
    }
  }
}
