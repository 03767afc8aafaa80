//! Native preview of the terrain journey.
//!
//! Drives the exact same core pipeline as the web frontend, with the mouse
//! wheel standing in for page scroll. Useful for tuning waypoints and the
//! height field without a browser. Press A to switch between the journey
//! scene and the ambient header scene.

use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use akser_core::{
    active_card_index, journey_anchor_positions, journey_cards, mesh_parallax, Camera, CameraPath,
    CameraPose, CameraRig, TerrainMesh, TerrainSpace, AMBIENT_EYE_OFFSET, JOURNEY_ANCHOR_COUNT,
    TERRAIN_WGSL, WAVE_AMPLITUDE, WAVE_SPEED,
};
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, PartialEq)]
enum Scene {
    Journey,
    Ambient,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    color: [f32; 4],
}

// Emerald wireframe on a paper-white clear, matching the site palette
const WIRE_COLOR: [f32; 4] = [0.063, 0.725, 0.506, 1.0];
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.98,
    g: 0.98,
    b: 0.97,
    a: 1.0,
};

// Wheel-to-progress mapping
const LINE_PROGRESS_STEP: f32 = 2.0;
const PIXEL_PROGRESS_SCALE: f32 = 0.02;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
    last_frame: Instant,
}

impl<'w> GpuState<'w> {
    async fn new(
        window: &'w winit::window::Window,
        vertex_count: usize,
        wire_indices: &[u32],
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("terrain_shader"),
            source: wgpu::ShaderSource::Wgsl(TERRAIN_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("terrain_vertices"),
            size: (vertex_count * std::mem::size_of::<Vec3>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("terrain_wire_indices"),
            contents: bytemuck::cast_slice(wire_indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("terrain_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_terrain"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vec3>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 0,
                    }],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_terrain"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            vertex_buffer,
            index_buffer,
            index_count: wire_indices.len() as u32,
            bind_group,
            width: size.width,
            height: size.height,
            last_frame: Instant::now(),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Seconds since the previous call.
    fn tick_dt(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        dt.as_secs_f32()
    }

    fn render(&mut self, vertices: &[Vec3], view_proj: Mat4) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue
            .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: view_proj.to_cols_array_2d(),
                color: WIRE_COLOR,
            }),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("terrain_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.index_count, 0, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let space = TerrainSpace::journey();
    let mut mesh = TerrainMesh::generate(&space);
    let path = CameraPath::from_anchors(&space, &journey_anchor_positions());

    // Both scenes use the same 100x100 grid, so one set of GPU buffers fits
    // either mesh.
    let ambient_space = TerrainSpace::ambient();
    let mut ambient_mesh = TerrainMesh::generate(&ambient_space);

    let mut scene = Scene::Journey;
    let mut rig = CameraRig::new();
    let mut progress = 0.0f32;
    let mut time_accum = 0.0f32;
    let mut active_card = usize::MAX;
    log::info!(
        "journey scene: {} vertices, {} waypoints",
        mesh.vertices.len(),
        path.len()
    );

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Akser terrengreise (native preview)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(
        &window,
        mesh.vertices.len(),
        &mesh.wire_indices,
    ))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::MouseWheel { delta, .. },
            ..
        } => {
            // Wheel down advances the journey, like scrolling the page
            let step = match delta {
                MouseScrollDelta::LineDelta(_, y) => y * LINE_PROGRESS_STEP,
                MouseScrollDelta::PixelDelta(p) => p.y as f32 * PIXEL_PROGRESS_SCALE,
            };
            progress = (progress - step).clamp(0.0, 100.0);
        }
        Event::WindowEvent {
            event: WindowEvent::KeyboardInput { event: key, .. },
            ..
        } => {
            if key.state == ElementState::Pressed
                && !key.repeat
                && key.physical_key == PhysicalKey::Code(KeyCode::KeyA)
            {
                scene = match scene {
                    Scene::Journey => Scene::Ambient,
                    Scene::Ambient => Scene::Journey,
                };
                // Snap instead of gliding across two coordinate frames.
                rig.reset();
                log::info!(
                    "scene: {}",
                    if scene == Scene::Ambient {
                        "ambient"
                    } else {
                        "journey"
                    }
                );
            }
        }
        Event::AboutToWait => {
            let dt = state.tick_dt();
            time_accum += dt * WAVE_SPEED;

            let (vertices, view_proj) = match scene {
                Scene::Journey => {
                    mesh.displace(&space, time_accum, progress / 100.0, WAVE_AMPLITUDE);
                    let vp = match path.pose_at(progress) {
                        Some(target) => {
                            let pose = rig.step(&target);
                            let camera = Camera::from_pose(&pose, state.aspect());
                            let parallax = mesh_parallax(progress);
                            camera.view_proj()
                                * space.model_matrix_with(parallax.offset, parallax.roll)
                        }
                        None => Mat4::IDENTITY,
                    };

                    let idx = active_card_index(progress, JOURNEY_ANCHOR_COUNT);
                    if idx != active_card {
                        active_card = idx;
                        if let Some(card) = journey_cards().nth(idx) {
                            log::info!("aktiv tjeneste {} - {}", card.id, card.title);
                        }
                    }
                    (&mesh.vertices, vp)
                }
                Scene::Ambient => {
                    ambient_mesh.displace(&ambient_space, time_accum, 0.0, WAVE_AMPLITUDE);
                    let target = CameraPose {
                        position: ambient_space.origin + AMBIENT_EYE_OFFSET,
                        target: ambient_space.origin,
                    };
                    let pose = rig.step(&target);
                    let camera = Camera::from_pose(&pose, state.aspect());
                    (
                        &ambient_mesh.vertices,
                        camera.view_proj() * ambient_space.model_matrix(),
                    )
                }
            };

            match state.render(vertices, view_proj) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
