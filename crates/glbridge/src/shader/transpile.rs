use super::scan::{Scanner, Tok};
use super::{Platform, ShaderStage};

const LEGACY_COLOR: &str = "gl_FragColor";
const COLOR_OUTPUT: &str = "fragColor";
const COLOR_DECL: &str = "out vec4 fragColor;\n";

/// Rewrites source-dialect shader text into the platform's desktop dialect.
///
/// Rewrites, in order:
/// 1. `#version 300 es` becomes the platform's core-profile directive.
/// 2. Global `precision <qualifier> float|int;` statements are dropped.
/// 3. With modern I/O: `attribute` becomes `in`; `varying` becomes `in` in
///    fragment shaders (or any shader writing `gl_FragColor`) and `out`
///    otherwise.
/// 4. With modern I/O: writes to `gl_FragColor` are renamed to `fragColor`
///    and an `out vec4 fragColor;` declaration is added below the version
///    directive.
///
/// Comments are copied verbatim. Anything not recognized passes through
/// untouched, so the function never fails. Applying it to its own output
/// returns the output unchanged.
pub fn transpile(source: &str, stage: ShaderStage, platform: Platform) -> String {
    let dialect = platform.dialect();
    let tokens = Scanner::new(source).tokenize();

    let writes_legacy_color = tokens.iter().any(|t| t.is_ident(LEGACY_COLOR));
    let varying_keyword = if stage == ShaderStage::Fragment || writes_legacy_color {
        "in"
    } else {
        "out"
    };

    let mut out = String::with_capacity(source.len() + COLOR_DECL.len());
    let mut i = 0;
    while i < tokens.len() {
        if let Some(len) = match_version(&tokens[i..]) {
            out.push_str(dialect.version_directive);
            i += len;
            continue;
        }
        if let Some(len) = match_precision(&tokens[i..]) {
            i += len;
            continue;
        }

        let tok = tokens[i];
        let text = match tok {
            Tok::Ident("attribute") if dialect.modern_io => "in",
            Tok::Ident("varying") if dialect.modern_io => varying_keyword,
            Tok::Ident(LEGACY_COLOR) if dialect.modern_io => COLOR_OUTPUT,
            other => other.text(),
        };
        out.push_str(text);
        i += 1;
    }

    if dialect.modern_io && writes_legacy_color {
        insert_color_output(&mut out);
    }
    out
}

/// `#version 300 es` with arbitrary horizontal spacing.
fn match_version(toks: &[Tok<'_>]) -> Option<usize> {
    let mut i = 0;
    expect(toks, &mut i, |t| *t == Tok::Punct("#"))?;
    skip_horizontal(toks, &mut i);
    expect(toks, &mut i, |t| t.is_ident("version"))?;
    expect(toks, &mut i, is_horizontal)?;
    expect(toks, &mut i, |t| *t == Tok::Number("300"))?;
    expect(toks, &mut i, is_horizontal)?;
    expect(toks, &mut i, |t| t.is_ident("es"))?;
    Some(i)
}

/// `precision lowp|mediump|highp float|int ;`
fn match_precision(toks: &[Tok<'_>]) -> Option<usize> {
    let mut i = 0;
    expect(toks, &mut i, |t| t.is_ident("precision"))?;
    expect(toks, &mut i, |t| matches!(t, Tok::Space(_)))?;
    expect(toks, &mut i, |t| {
        t.is_ident("lowp") || t.is_ident("mediump") || t.is_ident("highp")
    })?;
    expect(toks, &mut i, |t| matches!(t, Tok::Space(_)))?;
    expect(toks, &mut i, |t| t.is_ident("float") || t.is_ident("int"))?;
    if matches!(toks.get(i), Some(Tok::Space(_))) {
        i += 1;
    }
    expect(toks, &mut i, |t| *t == Tok::Punct(";"))?;
    Some(i)
}

fn expect(toks: &[Tok<'_>], i: &mut usize, pred: impl Fn(&Tok<'_>) -> bool) -> Option<()> {
    let tok = toks.get(*i)?;
    if !pred(tok) {
        return None;
    }
    *i += 1;
    Some(())
}

fn is_horizontal(t: &Tok<'_>) -> bool {
    matches!(t, Tok::Space(s) if !s.contains('\n'))
}

fn skip_horizontal(toks: &[Tok<'_>], i: &mut usize) {
    if toks.get(*i).is_some_and(is_horizontal) {
        *i += 1;
    }
}

/// Puts the color output declaration on the line after `#version`, or at
/// the very top when there is no directive.
fn insert_color_output(out: &mut String) {
    let directive_line = out
        .match_indices("#version")
        .map(|(at, _)| at)
        .find(|&at| out[..at].rsplit('\n').next().is_some_and(|lead| lead.trim().is_empty()));

    let at = match directive_line {
        Some(start) => match out[start..].find('\n') {
            Some(nl) => start + nl + 1,
            None => {
                out.push('\n');
                out.len()
            }
        },
        None => 0,
    };
    out.insert_str(at, COLOR_DECL);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LEGACY_FRAGMENT: &str = "#version 300 es\n\
        precision mediump float;\n\
        varying vec2 v_uv;\n\
        uniform sampler2D u_tex;\n\
        void main() {\n\
            gl_FragColor = texture(u_tex, v_uv);\n\
        }\n";

    // ── version directive ────────────────────────────────────────────────

    #[test]
    fn version_directive_becomes_330_core_on_macos() {
        let out = transpile("#version 300 es\nvoid main(){}", ShaderStage::Vertex, Platform::MacOs);
        assert!(out.starts_with("#version 330 core"));
        assert!(!out.contains("300 es"));
        assert_eq!(out, "#version 330 core\nvoid main(){}");
    }

    #[test]
    fn version_directive_becomes_430_core_elsewhere() {
        let out = transpile("#version 300 es\nvoid main(){}", ShaderStage::Vertex, Platform::Linux);
        assert_eq!(out, "#version 430 core\nvoid main(){}");
    }

    #[test]
    fn other_version_directives_pass_through() {
        let src = "#version 100\nvoid main(){}";
        assert_eq!(transpile(src, ShaderStage::Vertex, Platform::MacOs), src);
    }

    // ── precision ────────────────────────────────────────────────────────

    #[test]
    fn precision_statements_are_removed() {
        let src = "precision highp float;\nprecision lowp  int ;\nprecision mediump sampler2D;\n";
        let out = transpile(src, ShaderStage::Fragment, Platform::Windows);
        assert_eq!(out, "\n\nprecision mediump sampler2D;\n");
    }

    #[test]
    fn precision_qualifiers_on_declarations_stay() {
        let src = "uniform highp float u_time;";
        assert_eq!(transpile(src, ShaderStage::Vertex, Platform::MacOs), src);
    }

    // ── legacy io ────────────────────────────────────────────────────────

    #[test]
    fn legacy_fragment_output_is_synthesized() {
        let out = transpile(LEGACY_FRAGMENT, ShaderStage::Fragment, Platform::MacOs);
        assert!(out.starts_with("#version 330 core\nout vec4 fragColor;\n"));
        assert!(!out.contains("gl_FragColor"));
        assert!(out.contains("fragColor = texture(u_tex, v_uv);"));
        assert!(out.contains("in vec2 v_uv;"));
        assert!(!out.contains("precision"));
    }

    #[test]
    fn output_is_declared_at_top_without_directive() {
        let out = transpile("void main(){ gl_FragColor = vec4(1.0); }", ShaderStage::Fragment, Platform::MacOs);
        assert_eq!(out, "out vec4 fragColor;\nvoid main(){ fragColor = vec4(1.0); }");
    }

    #[test]
    fn vertex_varyings_become_outputs() {
        let src = "attribute vec3 a_pos;\nvarying vec3 v_pos;\n";
        let out = transpile(src, ShaderStage::Vertex, Platform::MacOs);
        assert_eq!(out, "in vec3 a_pos;\nout vec3 v_pos;\n");
    }

    #[test]
    fn keywords_inside_identifiers_and_comments_are_kept() {
        let src = "// attribute varying gl_FragColor\nfloat attributeScale;\n";
        let out = transpile(src, ShaderStage::Vertex, Platform::MacOs);
        assert_eq!(out, src);
    }

    #[test]
    fn legacy_io_is_left_alone_off_macos() {
        let out = transpile(LEGACY_FRAGMENT, ShaderStage::Fragment, Platform::Linux);
        assert!(out.contains("gl_FragColor"));
        assert!(out.contains("varying vec2 v_uv;"));
        assert!(!out.contains("out vec4 fragColor;"));
    }

    #[test]
    fn modern_shader_only_gets_the_directive_rewrite() {
        let src = "#version 300 es\nin vec2 a;\nout vec4 color;\nvoid main(){ color = vec4(a, 0.0, 1.0); }";
        let out = transpile(src, ShaderStage::Fragment, Platform::MacOs);
        assert_eq!(out, src.replace("#version 300 es", "#version 330 core"));
    }

    // ── idempotence ──────────────────────────────────────────────────────

    #[test]
    fn second_pass_is_a_no_op() {
        for platform in [Platform::MacOs, Platform::Linux] {
            let once = transpile(LEGACY_FRAGMENT, ShaderStage::Fragment, platform);
            let twice = transpile(&once, ShaderStage::Fragment, platform);
            assert_eq!(once, twice);
        }
    }

    proptest! {
        #[test]
        fn transpile_is_idempotent(
            body in proptest::collection::vec(
                prop_oneof![
                    Just("#version 300 es\n"),
                    Just("precision mediump float;\n"),
                    Just("attribute vec2 a;\n"),
                    Just("varying vec2 v;\n"),
                    Just("gl_FragColor = vec4(v, 0.0, 1.0);\n"),
                    Just("// gl_FragColor\n"),
                    Just("void main() {}\n"),
                ],
                0..8,
            ),
            fragment in any::<bool>(),
        ) {
            let src: String = body.concat();
            let stage = if fragment { ShaderStage::Fragment } else { ShaderStage::Vertex };
            let once = transpile(&src, stage, Platform::MacOs);
            prop_assert_eq!(transpile(&once, stage, Platform::MacOs), once);
        }
    }
}
