use wgpu::{BindGroup, BindGroupLayout, Buffer, Device, Queue};

/// Per-frame shader parameters.
///
/// Field order and size are a fixed contract with the uniform block in
/// `ripple.wgsl`: three f32s, 12 bytes, no padding. Width and height are
/// re-read from the surface every frame so a resize shows up without
/// touching any GPU object.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PatternUniforms {
    pub width: f32,
    pub height: f32,
    pub time: f32,
}

impl PatternUniforms {
    pub const SIZE: u64 = std::mem::size_of::<PatternUniforms>() as u64;

    pub fn new(width: f32, height: f32, time: f32) -> Self {
        Self {
            width,
            height,
            time,
        }
    }
}

/// The uniform buffer and the bind group pairing it to slot 0.
///
/// Both are created exactly once; only the buffer's bytes change per frame.
pub struct UniformBinding {
    buffer: Buffer,
    bind_group: BindGroup,
}

impl UniformBinding {
    pub fn new(device: &Device, layout: &BindGroupLayout) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Pattern Uniform Buffer"),
            size: PatternUniforms::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Pattern Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self { buffer, bind_group }
    }

    /// Overwrite the buffer with this frame's parameters.
    pub fn write(&self, queue: &Queue, uniforms: PatternUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    pub fn bind_group(&self) -> &BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_are_twelve_bytes() {
        assert_eq!(std::mem::size_of::<PatternUniforms>(), 12);
        assert_eq!(PatternUniforms::SIZE, 12);
    }

    #[test]
    fn uniforms_layout_matches_shader_contract() {
        let u = PatternUniforms::new(800.0, 600.0, 1.5);
        let bytes = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 12);

        let width = f32::from_le_bytes(bytes[0..4].try_into().unwrap());
        let height = f32::from_le_bytes(bytes[4..8].try_into().unwrap());
        let time = f32::from_le_bytes(bytes[8..12].try_into().unwrap());
        assert_eq!(width, 800.0);
        assert_eq!(height, 600.0);
        assert_eq!(time, 1.5);
    }
}
