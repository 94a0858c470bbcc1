use bevy::{
    core_pipeline::{
        core_3d::graph::{Core3d, Node3d},
        fullscreen_vertex_shader::fullscreen_shader_vertex_state,
    },
    ecs::query::QueryItem,
    prelude::*,
    render::{
        RenderApp,
        extract_component::{
            ComponentUniforms, DynamicUniformIndex, ExtractComponent, ExtractComponentPlugin,
            UniformComponentPlugin,
        },
        render_graph::{
            NodeRunError, RenderGraphApp, RenderGraphContext, RenderLabel, ViewNode, ViewNodeRunner,
        },
        render_resource::{
            binding_types::{sampler, texture_2d, uniform_buffer},
            *,
        },
        renderer::{RenderContext, RenderDevice},
        view::ViewTarget,
    },
};
use constants::render_settings::{NOISE_OPACITY, SCANLINE_DENSITY, SCANLINE_OPACITY};

use crate::engine::core::app_state::AppState;
use crate::engine::render::glitch::GlitchSchedule;

const CYBER_SHADER_PATH: &str = "shaders/cyber_postprocess.wgsl";

/// Glitch, scanline and noise pass for the dark theme. Runs on any camera
/// carrying [`CyberPostSettings`].
pub struct CyberPostProcessPlugin;

impl Plugin for CyberPostProcessPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            ExtractComponentPlugin::<CyberPostSettings>::default(),
            UniformComponentPlugin::<CyberPostSettings>::default(),
        ))
        .init_resource::<GlitchSchedule>()
        .add_systems(
            Update,
            update_post_settings.run_if(in_state(AppState::Running)),
        );

        let Some(render_app) = app.get_sub_app_mut(RenderApp) else {
            return;
        };

        render_app
            .add_render_graph_node::<ViewNodeRunner<CyberPostProcessNode>>(
                Core3d,
                CyberPostProcessLabel,
            )
            .add_render_graph_edges(
                Core3d,
                (
                    Node3d::Tonemapping,
                    CyberPostProcessLabel,
                    Node3d::EndMainPassPostProcessing,
                ),
            );
    }

    fn finish(&self, app: &mut App) {
        let Some(render_app) = app.get_sub_app_mut(RenderApp) else {
            return;
        };

        render_app.init_resource::<CyberPostProcessPipeline>();
    }
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, RenderLabel)]
struct CyberPostProcessLabel;

#[derive(Component, Debug, Clone, Copy, ExtractComponent, ShaderType)]
pub struct CyberPostSettings {
    pub time: f32,
    /// Scanlines per pixel row.
    pub scanline_density: f32,
    pub scanline_opacity: f32,
    pub noise_opacity: f32,
    /// Horizontal band displacement as a share of the frame; zero between
    /// bursts.
    pub glitch_strength: f32,
    pub glitch_seed: f32,
    // WebGL2 uniforms are 16-byte aligned.
    pub _padding: Vec2,
}

impl Default for CyberPostSettings {
    fn default() -> Self {
        Self {
            time: 0.0,
            scanline_density: SCANLINE_DENSITY,
            scanline_opacity: SCANLINE_OPACITY,
            noise_opacity: NOISE_OPACITY,
            glitch_strength: 0.0,
            glitch_seed: 0.0,
            _padding: Vec2::ZERO,
        }
    }
}

fn update_post_settings(
    time: Res<Time>,
    mut schedule: ResMut<GlitchSchedule>,
    mut settings: Query<&mut CyberPostSettings>,
) {
    let now = time.elapsed_secs();
    let burst = schedule.update(now);

    for mut settings in &mut settings {
        settings.time = now;
        match burst {
            Some(burst) => {
                settings.glitch_strength = burst.strength;
                settings.glitch_seed = burst.seed;
            }
            None => settings.glitch_strength = 0.0,
        }
    }
}

#[derive(Default)]
struct CyberPostProcessNode;

impl ViewNode for CyberPostProcessNode {
    type ViewQuery = (
        &'static ViewTarget,
        &'static CyberPostSettings,
        &'static DynamicUniformIndex<CyberPostSettings>,
    );

    fn run(
        &self,
        _graph: &mut RenderGraphContext,
        render_context: &mut RenderContext,
        (view_target, _settings, settings_index): QueryItem<Self::ViewQuery>,
        world: &World,
    ) -> Result<(), NodeRunError> {
        let cyber_pipeline = world.resource::<CyberPostProcessPipeline>();
        let pipeline_cache = world.resource::<PipelineCache>();

        let Some(pipeline) = pipeline_cache.get_render_pipeline(cyber_pipeline.pipeline_id) else {
            return Ok(());
        };

        let settings_uniforms = world.resource::<ComponentUniforms<CyberPostSettings>>();
        let Some(settings_binding) = settings_uniforms.uniforms().binding() else {
            return Ok(());
        };

        let post_process = view_target.post_process_write();

        let bind_group = render_context.render_device().create_bind_group(
            "cyber_post_process_bind_group",
            &cyber_pipeline.layout,
            &BindGroupEntries::sequential((
                post_process.source,
                &cyber_pipeline.sampler,
                settings_binding.clone(),
            )),
        );

        let mut render_pass = render_context.begin_tracked_render_pass(RenderPassDescriptor {
            label: Some("cyber_post_process_pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: post_process.destination,
                resolve_target: None,
                ops: Operations::default(),
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_render_pipeline(pipeline);
        render_pass.set_bind_group(0, &bind_group, &[settings_index.index()]);
        render_pass.draw(0..3, 0..1);

        Ok(())
    }
}

#[derive(Resource)]
struct CyberPostProcessPipeline {
    layout: BindGroupLayout,
    sampler: Sampler,
    pipeline_id: CachedRenderPipelineId,
}

impl FromWorld for CyberPostProcessPipeline {
    fn from_world(world: &mut World) -> Self {
        let render_device = world.resource::<RenderDevice>();

        let layout = render_device.create_bind_group_layout(
            "cyber_post_process_bind_group_layout",
            &BindGroupLayoutEntries::sequential(
                ShaderStages::FRAGMENT,
                (
                    texture_2d(TextureSampleType::Float { filterable: false }),
                    sampler(SamplerBindingType::NonFiltering),
                    uniform_buffer::<CyberPostSettings>(true),
                ),
            ),
        );

        let sampler = render_device.create_sampler(&SamplerDescriptor {
            mag_filter: FilterMode::Nearest,
            min_filter: FilterMode::Nearest,
            ..default()
        });

        let shader = world.load_asset(CYBER_SHADER_PATH);

        let pipeline_id =
            world
                .resource_mut::<PipelineCache>()
                .queue_render_pipeline(RenderPipelineDescriptor {
                    label: Some("cyber_post_process_pipeline".into()),
                    layout: vec![layout.clone()],
                    vertex: fullscreen_shader_vertex_state(),
                    fragment: Some(FragmentState {
                        shader,
                        shader_defs: vec![],
                        entry_point: "fragment".into(),
                        // The scene camera renders HDR, so the view target
                        // textures after tonemapping keep the HDR format.
                        targets: vec![Some(ColorTargetState {
                            format: ViewTarget::TEXTURE_FORMAT_HDR,
                            blend: None,
                            write_mask: ColorWrites::ALL,
                        })],
                    }),
                    primitive: PrimitiveState::default(),
                    depth_stencil: None,
                    multisample: MultisampleState::default(),
                    push_constant_ranges: vec![],
                    zero_initialize_workgroup_memory: false,
                });

        Self {
            layout,
            sampler,
            pipeline_id,
        }
    }
}
