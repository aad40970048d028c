//! WebGL2 shader pages: one fullscreen triangle and an animation-frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Element, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer,
    WebGlProgram, WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject,
    WebglLoseContext,
};

use super::shaders::{ShaderSource, VERTEX};
use crate::error::{Result, ShowcaseError};
use crate::page::RenderablePage;

// One oversized triangle covers the whole clip space.
const FULLSCREEN_TRIANGLE: [f32; 6] = [-1.0, -1.0, 3.0, -1.0, -1.0, 3.0];

type FrameCallback = Closure<dyn FnMut(f64)>;

struct Scene {
    canvas: HtmlCanvasElement,
    gl: GL,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    buffer: WebGlBuffer,
    u_time: Option<WebGlUniformLocation>,
    u_resolution: Option<WebGlUniformLocation>,
    last_time: Cell<f32>,
}

impl Scene {
    /// Builds the program and geometry. On failure every GL object created so
    /// far is deleted and the context is given back.
    fn new(canvas: HtmlCanvasElement, gl: GL, source: &ShaderSource) -> Result<Self> {
        match Self::build(&gl, source) {
            Ok((program, vao, buffer)) => {
                let u_time = gl.get_uniform_location(&program, "iTime");
                let u_resolution = gl.get_uniform_location(&program, "iResolution");
                Ok(Self {
                    canvas,
                    gl,
                    program,
                    vao,
                    buffer,
                    u_time,
                    u_resolution,
                    last_time: Cell::new(0.0),
                })
            }
            Err(e) => {
                lose_context(&gl);
                Err(e)
            }
        }
    }

    fn build(
        gl: &GL,
        source: &ShaderSource,
    ) -> Result<(WebGlProgram, WebGlVertexArrayObject, WebGlBuffer)> {
        let vert = compile(gl, GL::VERTEX_SHADER, VERTEX)?;
        let frag = match compile(gl, GL::FRAGMENT_SHADER, &source.fragment()) {
            Ok(frag) => frag,
            Err(e) => {
                gl.delete_shader(Some(&vert));
                return Err(e);
            }
        };
        let program = link(gl, &vert, &frag);
        gl.delete_shader(Some(&vert));
        gl.delete_shader(Some(&frag));
        let program = program?;

        let (vao, buffer) = match (gl.create_vertex_array(), gl.create_buffer()) {
            (Some(vao), Some(buffer)) => (vao, buffer),
            (vao, buffer) => {
                gl.delete_vertex_array(vao.as_ref());
                gl.delete_buffer(buffer.as_ref());
                gl.delete_program(Some(&program));
                return Err(ShowcaseError::context("vertex array or buffer allocation failed"));
            }
        };
        let Ok(loc) = u32::try_from(gl.get_attrib_location(&program, "a_pos")) else {
            gl.delete_vertex_array(Some(&vao));
            gl.delete_buffer(Some(&buffer));
            gl.delete_program(Some(&program));
            return Err(ShowcaseError::context("a_pos attribute missing"));
        };

        gl.bind_vertex_array(Some(&vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let vertices = js_sys::Float32Array::from(&FULLSCREEN_TRIANGLE[..]);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);
        gl.enable_vertex_attrib_array(loc);
        gl.vertex_attrib_pointer_with_i32(loc, 2, GL::FLOAT, false, 0, 0);
        gl.bind_vertex_array(None);
        Ok((program, vao, buffer))
    }

    fn draw(&self, seconds: f32) {
        self.last_time.set(seconds);
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let gl = &self.gl;
        gl.viewport(0, 0, w as i32, h as i32);
        gl.use_program(Some(&self.program));
        gl.uniform1f(self.u_time.as_ref(), seconds);
        gl.uniform3f(self.u_resolution.as_ref(), w as f32, h as f32, 1.0);
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(GL::TRIANGLES, 0, 3);
    }

    fn set_size(&self, width: f64, height: f64) {
        self.canvas.set_width(width.max(1.0) as u32);
        self.canvas.set_height(height.max(1.0) as u32);
        // Resizing clears the drawing buffer; repaint the last frame.
        self.draw(self.last_time.get());
    }

    /// Frees GL objects and gives the context back to the browser.
    fn release(&self) {
        let gl = &self.gl;
        gl.delete_vertex_array(Some(&self.vao));
        gl.delete_buffer(Some(&self.buffer));
        gl.delete_program(Some(&self.program));
        lose_context(gl);
    }
}

fn lose_context(gl: &GL) {
    if let Ok(Some(ext)) = gl.get_extension("WEBGL_lose_context") {
        ext.unchecked_into::<WebglLoseContext>().lose_context();
    }
}

fn compile(gl: &GL, kind: u32, src: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| ShowcaseError::context("create_shader failed"))?;
    gl.shader_source(&shader, src);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        return Ok(shader);
    }
    let info = gl.get_shader_info_log(&shader).unwrap_or_default();
    gl.delete_shader(Some(&shader));
    Err(ShowcaseError::context(format!("shader compile failed: {info}")))
}

fn link(gl: &GL, vert: &WebGlShader, frag: &WebGlShader) -> Result<WebGlProgram> {
    let program = gl
        .create_program()
        .ok_or_else(|| ShowcaseError::context("create_program failed"))?;
    gl.attach_shader(&program, vert);
    gl.attach_shader(&program, frag);
    gl.link_program(&program);
    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        return Ok(program);
    }
    let info = gl.get_program_info_log(&program).unwrap_or_default();
    gl.delete_program(Some(&program));
    Err(ShowcaseError::context(format!("program link failed: {info}")))
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

/// A full-viewport section running one fragment shader.
pub struct ShaderPage {
    name: &'static str,
    section: Element,
    scene: Rc<Scene>,
    // `frame` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself; `cleanup` breaks that cycle.
    frame: Rc<RefCell<Option<FrameCallback>>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl ShaderPage {
    pub fn create(source: &'static ShaderSource) -> Result<Self> {
        let window = window().ok_or_else(|| ShowcaseError::dom("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| ShowcaseError::dom("no document"))?;

        let section = document.create_element("section")?;
        section.set_class_name("full-page");
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ShowcaseError::dom("canvas element has unexpected type"))?;
        canvas.set_class_name("shader-canvas");
        let (width, height) = super::inner_size(&window)?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        section.append_child(&canvas)?;

        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or_else(|| ShowcaseError::context("WebGL2 not supported"))?
            .dyn_into()
            .map_err(|_| ShowcaseError::context("webgl2 context has unexpected type"))?;
        let scene = Scene::new(canvas, gl, source)?;
        debug!("shader page {} created", source.name);

        Ok(Self {
            name: source.name,
            section,
            scene: Rc::new(scene),
            frame: Rc::new(RefCell::new(None)),
            handle: Rc::new(Cell::new(None)),
        })
    }
}

impl RenderablePage for ShaderPage {
    type Surface = Element;

    fn surface(&self) -> &Element {
        &self.section
    }

    fn play(&mut self) {
        if self.handle.get().is_some() {
            return;
        }
        if self.frame.borrow().is_none() {
            let scene = Rc::clone(&self.scene);
            let frame = Rc::clone(&self.frame);
            let handle = Rc::clone(&self.handle);
            *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                scene.draw((now * 0.001) as f32);
                // schedule next
                handle.set(frame.borrow().as_ref().and_then(request_frame));
            }) as Box<dyn FnMut(f64)>));
        }
        self.handle
            .set(self.frame.borrow().as_ref().and_then(request_frame));
    }

    fn pause(&mut self) {
        if let (Some(id), Some(win)) = (self.handle.take(), window()) {
            win.cancel_animation_frame(id).ok();
        }
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.scene.set_size(width, height);
    }

    fn cleanup(&mut self) {
        self.pause();
        self.frame.borrow_mut().take();
        self.scene.release();
        debug!("shader page {} released", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wasm::shaders::CATALOG;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn webgl2() -> Option<(HtmlCanvasElement, GL)> {
        let document = window()?.document()?;
        let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
        let gl = canvas.get_context("webgl2").ok()??.dyn_into().ok()?;
        Some((canvas, gl))
    }

    #[wasm_bindgen_test]
    fn failed_build_gives_the_context_back() {
        // Headless runners without WebGL2 have nothing to leak.
        let Some((canvas, gl)) = webgl2() else {
            return;
        };
        let broken = ShaderSource {
            name: "broken",
            body: "void mainImage(out vec4 c, in vec2 p) { c = undefined_symbol; }",
        };
        assert!(Scene::new(canvas, gl.clone(), &broken).is_err());
        assert!(gl.is_context_lost());
    }

    #[wasm_bindgen_test]
    fn release_gives_the_context_back() {
        let Some((canvas, gl)) = webgl2() else {
            return;
        };
        let scene = Scene::new(canvas, gl.clone(), &CATALOG[0]).unwrap();
        assert!(!gl.is_context_lost());
        scene.release();
        assert!(gl.is_context_lost());
    }
}
