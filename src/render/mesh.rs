use crate::core::{EnvironmentMap, Group, Vertex};
use glam::Mat4;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) eye: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    normal_model: [[f32; 4]; 4],
    tint: [f32; 4], // rgb tint, a = env intensity
}

impl ObjectUniforms {
    fn for_group(group: &Group) -> Self {
        let model = group.node.local_matrix();
        let m = &group.material;
        Self {
            model: model.to_cols_array_2d(),
            normal_model: normal_matrix(model).to_cols_array_2d(),
            tint: [m.color.x, m.color.y, m.color.z, m.env_intensity],
        }
    }
}

#[inline]
fn normal_matrix(model: Mat4) -> Mat4 {
    model.inverse().transpose()
}

/// Static vertex/index buffers of one rigid group.
pub(crate) struct GroupBuffers {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

pub(crate) struct MeshResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) globals_buffer: wgpu::Buffer,
    pub(crate) globals_bind_group: wgpu::BindGroup,
    pub(crate) object_buffer: wgpu::Buffer,
    pub(crate) object_bind_group: wgpu::BindGroup,
    pub(crate) object_stride: u64,
    pub(crate) object_capacity: usize,
    // Kept alive for the globals bind group
    pub(crate) _env_texture: wgpu::Texture,
}

pub(crate) fn create_mesh_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    hdr_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
    env: &EnvironmentMap,
    object_capacity: usize,
) -> MeshResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });

    let env_texture = upload_env_map(device, queue, env);
    let env_view = env_texture.create_view(&wgpu::TextureViewDescriptor::default());

    let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_globals_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    // Rgba32Float is read with textureLoad, no sampler needed
                    sample_type: wgpu::TextureSampleType::Float { filterable: false },
                },
                count: None,
            },
        ],
    });
    let object_size = std::mem::size_of::<ObjectUniforms>() as u64;
    let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_object_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: wgpu::BufferSize::new(object_size),
            },
            count: None,
        }],
    });

    let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_globals"),
        size: std::mem::size_of::<Globals>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_globals_bg"),
        layout: &globals_bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&env_view),
            },
        ],
    });

    // One aligned slot per group, selected with a dynamic offset
    let align = device.limits().min_uniform_buffer_offset_alignment as u64;
    let object_stride = object_size.div_ceil(align) * align;
    let object_capacity = object_capacity.max(1);
    let object_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_objects"),
        size: object_stride * object_capacity as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let object_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_object_bg"),
        layout: &object_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &object_buffer,
                offset: 0,
                size: wgpu::BufferSize::new(object_size),
            }),
        }],
    });

    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&globals_bgl, &object_bgl],
        push_constant_ranges: &[],
    });
    let vertex_buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    }];
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        // Double-sided materials: no culling, the shader flips back-face normals
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: depth_format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: hdr_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    MeshResources {
        pipeline,
        globals_buffer,
        globals_bind_group,
        object_buffer,
        object_bind_group,
        object_stride,
        object_capacity,
        _env_texture: env_texture,
    }
}

fn upload_env_map(device: &wgpu::Device, queue: &wgpu::Queue, env: &EnvironmentMap) -> wgpu::Texture {
    let size = wgpu::Extent3d {
        width: env.width,
        height: env.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("env_map"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba32Float,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        env.bytes(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(env.width * 16),
            rows_per_image: Some(env.height),
        },
        size,
    );
    texture
}

/// Upload each group's baked geometry once; draw order follows `groups`.
pub(crate) fn upload_groups<'g>(
    device: &wgpu::Device,
    groups: impl Iterator<Item = &'g Group>,
) -> Vec<GroupBuffers> {
    groups
        .map(|group| {
            let geometry = group.baked_geometry();
            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(group.label),
                contents: bytemuck::cast_slice(&geometry.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(group.label),
                contents: bytemuck::cast_slice(&geometry.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            GroupBuffers {
                vertex_buffer,
                index_buffer,
                index_count: geometry.indices.len() as u32,
            }
        })
        .collect()
}

/// Pack per-group uniforms into `out`, one `stride`-sized slot each.
pub(crate) fn pack_objects<'g>(
    groups: impl Iterator<Item = &'g Group>,
    stride: u64,
    out: &mut Vec<u8>,
) {
    out.clear();
    for group in groups {
        let start = out.len();
        out.extend_from_slice(bytemuck::bytes_of(&ObjectUniforms::for_group(group)));
        out.resize(start + stride as usize, 0);
    }
}
