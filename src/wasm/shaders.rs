/// Fragment bodies in Shadertoy form: each defines
/// `mainImage(out vec4, in vec2)` against `iTime` and `iResolution`.
pub struct ShaderSource {
    pub name: &'static str,
    pub body: &'static str,
}

pub static CATALOG: [ShaderSource; 6] = [
    ShaderSource { name: "plasma", body: include_str!("shaders/plasma.frag") },
    ShaderSource { name: "warp", body: include_str!("shaders/warp.frag") },
    ShaderSource { name: "aurora", body: include_str!("shaders/aurora.frag") },
    ShaderSource { name: "rings", body: include_str!("shaders/rings.frag") },
    ShaderSource { name: "tunnel", body: include_str!("shaders/tunnel.frag") },
    ShaderSource { name: "spectrum", body: include_str!("shaders/spectrum.frag") },
];

pub const VERTEX: &str = "#version 300 es
in vec2 a_pos;
void main() {
    gl_Position = vec4(a_pos, 0.0, 1.0);
}
";

const FRAGMENT_PRELUDE: &str = "#version 300 es
precision highp float;
uniform float iTime;
uniform vec3 iResolution;
out vec4 outColor;
";

const FRAGMENT_MAIN: &str = "
void main() {
    mainImage(outColor, gl_FragCoord.xy);
}
";

impl ShaderSource {
    /// Complete GLSL ES 3.00 fragment shader.
    pub fn fragment(&self) -> String {
        [FRAGMENT_PRELUDE, self.body, FRAGMENT_MAIN].concat()
    }
}
