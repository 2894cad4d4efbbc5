use crate::constants::SceneParams;
use crate::core::{Camera, ClockFace, EnvironmentMap};
use web_sys as web;

mod helpers;
mod mesh;
mod post;
mod targets;
use mesh::{GroupBuffers, MeshResources};
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // Scene pass: reflective meshes into HDR
    mesh: MeshResources,
    groups: Vec<GroupBuffers>,
    object_scratch: Vec<u8>,
    // Composite: tone map HDR onto the swapchain
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    bg_hdr: wgpu::BindGroup,

    width: u32,
    height: u32,
    background: [f32; 3],
    exposure: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        env: &EnvironmentMap,
        clock: &ClockFace,
        params: &SceneParams,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let mesh = mesh::create_mesh_resources(
            &device,
            &queue,
            helpers::HDR_FORMAT,
            helpers::DEPTH_FORMAT,
            env,
            clock.group_count(),
        );
        let groups = mesh::upload_groups(&device, clock.groups());
        log::info!(
            "[gpu] uploaded {} groups, {} triangles",
            groups.len(),
            groups.iter().map(|g| g.index_count / 3).sum::<u32>()
        );

        let targets = RenderTargets::new(&device, width, height);
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("composite_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::COMPOSITE_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, format);
        let bg_hdr = post::create_hdr_bind_group(&device, &post, &linear_sampler, &targets.hdr_view);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            mesh,
            groups,
            object_scratch: Vec::new(),
            targets,
            linear_sampler,
            post,
            bg_hdr,
            width,
            height,
            background: params.background,
            exposure: params.exposure,
        })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen targets and the composite input that samples them
            self.targets.recreate(&self.device, width, height);
            self.bg_hdr = post::create_hdr_bind_group(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets.hdr_view,
            );
        }
    }

    /// Reconfigure after the surface was lost or became outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, clock: &ClockFace, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let globals = mesh::Globals {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
        };
        self.queue
            .write_buffer(&self.mesh.globals_buffer, 0, bytemuck::bytes_of(&globals));
        let draw_count = self.groups.len().min(self.mesh.object_capacity);
        mesh::pack_objects(
            clock.groups().take(draw_count),
            self.mesh.object_stride,
            &mut self.object_scratch,
        );
        self.queue
            .write_buffer(&self.mesh.object_buffer, 0, &self.object_scratch);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.mesh.pipeline);
            rpass.set_bind_group(0, &self.mesh.globals_bind_group, &[]);
            for (i, g) in self.groups.iter().take(draw_count).enumerate() {
                let offset = (i as u64 * self.mesh.object_stride) as u32;
                rpass.set_bind_group(1, &self.mesh.object_bind_group, &[offset]);
                rpass.set_vertex_buffer(0, g.vertex_buffer.slice(..));
                rpass.set_index_buffer(g.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..g.index_count, 0, 0..1);
            }
        }

        post::write_post_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            self.background,
            self.exposure,
        );
        post::blit(
            &mut encoder,
            "composite",
            &view,
            wgpu::Color::WHITE,
            &self.post.composite_pipeline,
            &self.bg_hdr,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
