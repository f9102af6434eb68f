use std::path::Path;

use anyhow::{bail, Context};

use super::mesh::{CpuMesh, Vertex};

//
// ──────────────────────────────────────────────────────────────
//   Wavefront OBJ loading (positions + normals + uvs)
//
//   Triangulated with a single shared index; materials are
//   ignored — the scene's texture and light come from the config.
// ──────────────────────────────────────────────────────────────
//

pub fn load_obj_mesh(path: &Path) -> anyhow::Result<CpuMesh>
{
  let text = std::fs::read_to_string(path)
    .with_context(|| format!("read OBJ: {}", path.display()))?;

  let mesh = parse_obj(&text).with_context(|| format!("parse OBJ: {}", path.display()))?;

  log::info!(
    "model {} ({} vertices, {} triangles)",
    path.display(),
    mesh.vertices.len(),
    mesh.indices.len() / 3
  );

  Ok(mesh)
}

fn parse_obj(text: &str) -> anyhow::Result<CpuMesh>
{
  let load_opts =
    tobj::LoadOptions { triangulate: true, single_index: true, ..Default::default() };

  let (models, _materials) =
    tobj::load_obj_buf(&mut text.as_bytes(), &load_opts, |_| Ok((Vec::new(), Default::default())))?;

  let mut vertices: Vec<Vertex> = Vec::new();
  let mut indices: Vec<u32> = Vec::new();

  for model in models
  {
    let mesh = model.mesh;
    let vertex_count = mesh.positions.len() / 3;
    let base = vertices.len() as u32;

    for i in 0..vertex_count
    {
      let position = [mesh.positions[3 * i], mesh.positions[3 * i + 1], mesh.positions[3 * i + 2]];

      // Fall back to straight-up normals and a zero uv when the file
      // omits them
      let normal = if mesh.normals.len() >= 3 * (i + 1)
      {
        [mesh.normals[3 * i], mesh.normals[3 * i + 1], mesh.normals[3 * i + 2]]
      }
      else
      {
        [0.0, 1.0, 0.0]
      };

      let uv = if mesh.texcoords.len() >= 2 * (i + 1)
      {
        [mesh.texcoords[2 * i], mesh.texcoords[2 * i + 1]]
      }
      else
      {
        [0.0, 0.0]
      };

      vertices.push(Vertex { position, normal, uv });
    }

    for &index in &mesh.indices
    {
      indices.push(base + index);
    }
  }

  // tobj yields a default model even for empty input; judge the file by
  // the geometry it actually produced
  if vertices.is_empty() || indices.is_empty()
  {
    bail!("no geometry in OBJ");
  }

  Ok(CpuMesh { vertices, indices })
}

//
// ──────────────────────────────────────────────────────────────
//   Tests
// ──────────────────────────────────────────────────────────────
//
