//! HTML5-canvas JavaScript backend.
//!
//! Generates plain JavaScript that replays a captured drawing against a 2D
//! canvas context: one draw function per element, a lookup table keyed by
//! element id, and a dispatcher that places an element into a caller-supplied
//! target rectangle.

use limner_core::{color::Color, element::Element, path::PathCommand};

use super::Backend;

// Statement indent inside generated function bodies.
const INDENT: &str = "    ";

/// The built-in canvas backend. Stateless; all drawing state lives in the
/// capture session.
#[derive(Debug, Default, Clone, Copy)]
pub struct Html5Canvas;

impl Html5Canvas {
    /// Creates a canvas backend.
    pub fn new() -> Self {
        Self
    }
}

impl Backend for Html5Canvas {
    fn begin_path(&self) -> String {
        format!("{INDENT}c.beginPath();")
    }

    fn close_path(&self) -> String {
        format!("{INDENT}c.closePath();")
    }

    fn encode_command(&self, command: &PathCommand) -> String {
        match *command {
            PathCommand::MoveTo { to } => {
                format!("{INDENT}c.moveTo({:.1}, {:.1});", to.x(), to.y())
            }
            PathCommand::LineTo { to } => {
                format!("{INDENT}c.lineTo({:.1}, {:.1});", to.x(), to.y())
            }
            PathCommand::CubicCurveTo {
                control1,
                control2,
                to,
            } => format!(
                "{INDENT}c.bezierCurveTo({:.1}, {:.1}, {:.1}, {:.1}, {:.1}, {:.1});",
                control1.x(),
                control1.y(),
                control2.x(),
                control2.y(),
                to.x(),
                to.y()
            ),
        }
    }

    fn set_stroke_style(&self, color: Color) -> String {
        format!("{INDENT}c.strokeStyle = '{}';", color.to_css_string())
    }

    fn set_fill_style(&self, color: Color) -> String {
        format!("{INDENT}c.fillStyle = '{}';", color.to_css_string())
    }

    fn stroke(&self) -> String {
        format!("{INDENT}c.stroke();")
    }

    fn fill(&self) -> String {
        format!("{INDENT}c.fill();")
    }

    fn serialize(&self, elements: &[Element], prefix: &str) -> String {
        let mut result = String::from("// This file has been generated by limner\n");
        let dictionary_name = format!("{prefix}_elements");

        let mut draw_functions = String::new();
        let mut dictionary = format!("\nvar {dictionary_name} = {{\n{INDENT}");

        for (index, element) in elements.iter().enumerate() {
            let function_name = format!("{prefix}_draw_{index:03}");

            draw_functions.push_str(&format!(
                "\nfunction {function_name}(c) // '{id}'\n{{\n",
                id = element.id()
            ));
            for statement in element.code() {
                draw_functions.push_str(statement);
                draw_functions.push('\n');
            }
            draw_functions.push_str("}\n");

            if index > 0 {
                dictionary.push_str(&format!(",\n{INDENT}"));
            }
            let origin = element.bounds().min_point();
            let size = element.bounds().to_size();
            dictionary.push_str(&format!(
                "'{id}': {{ id: '{id}', bounds: {{ x: {x:.1}, y: {y:.1}, width: {w:.1}, height: {h:.1} }}, drawfunction: {function_name} }}",
                id = element.id(),
                x = origin.x(),
                y = origin.y(),
                w = size.width(),
                h = size.height(),
            ));
        }
        dictionary.push_str("\n}\n");

        result.push_str(&draw_functions);
        result.push_str(&dictionary);

        // Dispatcher: look the element up by id, place its bounding box into
        // the caller's target rectangle, and replay its draw function. An
        // unknown id draws nothing.
        result.push_str(&format!(
            "\nfunction {prefix}_draw(context, id, x, y, width, height)\n{{\n"
        ));
        result.push_str(&format!("{INDENT}var element = {dictionary_name}[id];\n"));
        result.push_str(&format!("{INDENT}if (element !== undefined) {{\n"));
        result.push_str(&format!("{INDENT}{INDENT}context.save();\n"));
        result.push_str(&format!("{INDENT}{INDENT}context.translate(x, y);\n"));
        result.push_str(&format!(
            "{INDENT}{INDENT}if (width !== undefined && height !== undefined)\n"
        ));
        result.push_str(&format!(
            "{INDENT}{INDENT}{INDENT}context.scale(width / element.bounds.width, height / element.bounds.height);\n"
        ));
        result.push_str(&format!(
            "{INDENT}{INDENT}context.translate(-element.bounds.x, -element.bounds.y);\n"
        ));
        result.push_str(&format!(
            "{INDENT}{INDENT}element.drawfunction(context);\n"
        ));
        result.push_str(&format!("{INDENT}{INDENT}context.restore();\n"));
        result.push_str(&format!("{INDENT}}}\n"));
        result.push_str("}\n\n");

        result
    }
}
