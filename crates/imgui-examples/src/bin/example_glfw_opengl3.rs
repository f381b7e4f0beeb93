//! Dear ImGui on GLFW with the OpenGL3 renderer.

fn main() {
    imgui_examples::main_for(imgui_examples::ClientApi::OpenGl3);
}
