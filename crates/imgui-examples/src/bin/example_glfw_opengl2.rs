//! Dear ImGui on GLFW with the OpenGL2 renderer.

fn main() {
    imgui_examples::main_for(imgui_examples::ClientApi::OpenGl2);
}
