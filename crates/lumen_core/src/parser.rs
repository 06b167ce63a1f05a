//! Scene text-format parser.
//!
//! The format is a whitespace-separated stream of keywords and numbers.
//! `#` starts a comment that runs to the end of the line.
//!
//! # Supported Syntax
//!
//! - `eye x y z`, `lookat x y z`, `up x y z`
//! - `fov degrees`
//! - `background r g b`
//! - `light r g b ambient`
//! - `light r g b directional dx dy dz`
//! - `light r g b point px py pz`
//! - `surf r g b ka kd ks ns kr kt ior` (applies to following spheres)
//! - `sphere cx cy cz radius`
//! - `end` (anything after it is ignored)
//!
//! Unknown keywords and stray numbers are skipped with a warning.

use std::collections::VecDeque;

use lumen_math::Vec3;
use thiserror::Error;

use crate::light::Light;
use crate::scene::{Scene, SceneBuilder};
use crate::surface::{Color, Surface};

/// Errors that can occur while parsing a scene file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Number expected at line {line}, found '{found}'")]
    ExpectedNumber { line: usize, found: String },

    #[error("Unknown light kind '{kind}' at line {line}")]
    UnknownLightKind { line: usize, kind: String },

    #[error("Degenerate {what} at line {line}")]
    Degenerate { line: usize, what: &'static str },

    #[error("Unexpected end of file after line {0}")]
    UnexpectedEof(usize),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug)]
struct Token {
    line: usize,
    text: String,
}

/// Scene file parser.
pub struct SceneParser {
    tokens: VecDeque<Token>,
    current_line: usize,
}

impl SceneParser {
    /// Create a new parser from file contents.
    pub fn new(content: &str) -> Self {
        let tokens = content
            .lines()
            .enumerate()
            .flat_map(|(i, line)| {
                let code = line.split('#').next().unwrap_or("");
                code.split_whitespace().map(move |word| Token {
                    line: i + 1,
                    text: word.to_string(),
                })
            })
            .collect();

        Self {
            tokens,
            current_line: 0,
        }
    }

    /// Parse the whole input into a scene.
    pub fn parse(mut self) -> ParseResult<Scene> {
        let mut builder = SceneBuilder::new();

        while let Some(token) = self.next_token() {
            builder = match token.text.as_str() {
                "end" => break,
                "eye" => builder.eye(self.vec3()?),
                "lookat" => builder.look_at(self.vec3()?),
                "up" => builder.up(self.vec3()?),
                "fov" => builder.fov(self.number()?),
                "background" => builder.background(self.vec3()?),
                "light" => {
                    let light = self.light()?;
                    builder.light(light)
                }
                "surf" => {
                    let surface = self.surface()?;
                    builder.surface(surface)
                }
                "sphere" => {
                    let center = self.vec3()?;
                    let radius = self.number()?;
                    builder.sphere(center, radius)
                }
                other if other.parse::<f32>().is_ok() => {
                    log::warn!("Ignoring stray number '{}' at line {}", other, token.line);
                    builder
                }
                other => {
                    log::warn!("Ignoring unknown keyword '{}' at line {}", other, token.line);
                    builder
                }
            };
        }

        Ok(builder.build())
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.pop_front()?;
        self.current_line = token.line;
        Some(token)
    }

    fn expect_token(&mut self) -> ParseResult<Token> {
        let line = self.current_line;
        self.next_token().ok_or(ParseError::UnexpectedEof(line))
    }

    fn number(&mut self) -> ParseResult<f32> {
        let token = self.expect_token()?;
        match token.text.parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ParseError::ExpectedNumber {
                line: token.line,
                found: token.text,
            }),
        }
    }

    fn vec3(&mut self) -> ParseResult<Vec3> {
        Ok(Vec3::new(self.number()?, self.number()?, self.number()?))
    }

    /// `light r g b kind [x y z]` after the keyword.
    fn light(&mut self) -> ParseResult<Light> {
        let color: Color = self.vec3()?;
        let kind = self.expect_token()?;

        match kind.text.as_str() {
            "ambient" => Ok(Light::ambient(color)),
            "directional" => {
                let direction = self.vec3()?;
                Light::directional(direction, color).map_err(|_| ParseError::Degenerate {
                    line: kind.line,
                    what: "directional light direction",
                })
            }
            "point" => Ok(Light::point(self.vec3()?, color)),
            _ => Err(ParseError::UnknownLightKind {
                line: kind.line,
                kind: kind.text,
            }),
        }
    }

    /// `surf r g b ka kd ks ns kr kt ior` after the keyword.
    fn surface(&mut self) -> ParseResult<Surface> {
        let color = self.vec3()?;
        let mut k = [0.0f32; 7];
        for value in k.iter_mut() {
            *value = self.number()?;
        }
        let [ka, kd, ks, ns, kr, kt, ior] = k;
        Ok(Surface::new(color, ka, kd, ks, ns, kr, kt, ior))
    }
}

/// Parse scene-file contents.
pub fn parse_scene(content: &str) -> ParseResult<Scene> {
    SceneParser::new(content).parse()
}
