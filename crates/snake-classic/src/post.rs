use anyhow::Result;
use macroquad::prelude::*;

/// Off-screen render target composited to the screen through a bloom
/// shader, with the y-flip the target texture requires.
pub struct PostProcess {
    target: RenderTarget,
    material: Material,
    width: f32,
    height: f32,
}

impl PostProcess {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let target = render_target(width as u32, height as u32);
        target.texture.set_filter(FilterMode::Nearest);

        let material = load_material(
            ShaderSource::Glsl {
                vertex: VERTEX_SHADER,
                fragment: BLOOM_FRAGMENT_SHADER,
            },
            MaterialParams::default(),
        )
        .map_err(|err| anyhow::anyhow!("failed to load bloom shader: {err}"))?;

        Ok(Self {
            target,
            material,
            width,
            height,
        })
    }

    /// Everything drawn between `begin` and `finish` lands in the target.
    pub fn begin(&self) {
        set_camera(&Camera2D {
            zoom: vec2(2.0 / self.width, 2.0 / self.height),
            target: vec2(self.width * 0.5, self.height * 0.5),
            render_target: Some(self.target.clone()),
            ..Default::default()
        });
    }

    pub fn finish(&self) {
        set_default_camera();
        clear_background(BLACK);

        gl_use_material(&self.material);
        draw_texture_ex(
            &self.target.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                flip_y: true,
                ..Default::default()
            },
        );
        gl_use_default_material();
    }
}

const VERTEX_SHADER: &str = r#"#version 100
attribute vec3 position;
attribute vec2 texcoord;

varying lowp vec2 uv;

uniform mat4 Model;
uniform mat4 Projection;

void main() {
    gl_Position = Projection * Model * vec4(position, 1);
    uv = texcoord;
}
"#;

const BLOOM_FRAGMENT_SHADER: &str = r#"#version 100
precision mediump float;

varying vec2 uv;

uniform sampler2D Texture;

void main() {
    const vec2 size = vec2(640.0, 640.0);
    const float samples = 5.0;
    const float quality = 2.5;

    vec4 sum = vec4(0.0);
    vec2 sizeFactor = vec2(1.0) / size * quality;
    vec4 source = texture2D(Texture, uv);

    const int range = 2;
    for (int x = -range; x <= range; x++) {
        for (int y = -range; y <= range; y++) {
            sum += texture2D(Texture, uv + vec2(float(x), float(y)) * sizeFactor);
        }
    }

    gl_FragColor = (sum / (samples * samples)) + source;
}
"#;
