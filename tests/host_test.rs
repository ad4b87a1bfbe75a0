//! Integration tests for materialization through a host.

use md2page::{
    convert, Divider, DocumentHost, Error, FontName, FontStyle, HostCommand, Md2Page, Page,
    ResolvedText, Result, ScriptHost, Size, StyledRun, TemplateRegistry, TextMeasurer, TextStyle,
};

/// A host that cannot load one font style and counts what it creates.
struct FailingHost {
    missing: FontStyle,
    loaded: Vec<FontName>,
    pages: usize,
}

impl FailingHost {
    fn new(missing: FontStyle) -> Self {
        Self {
            missing,
            loaded: Vec::new(),
            pages: 0,
        }
    }
}

impl TextMeasurer for FailingHost {
    fn natural_size(&self, _runs: &[StyledRun], _style: &TextStyle) -> Result<Size> {
        Ok(Size::new(10.0, 10.0))
    }

    fn wrapped_size(&self, _runs: &[StyledRun], _style: &TextStyle, width: f32) -> Result<Size> {
        Ok(Size::new(width, 10.0))
    }
}

impl DocumentHost for FailingHost {
    type PageHandle = ();

    fn load_font(&mut self, font: &FontName) -> Result<()> {
        if font.style == self.missing {
            return Err(Error::Host("font not installed".to_string()));
        }
        self.loaded.push(font.clone());
        Ok(())
    }

    fn create_page(&mut self, _page: &Page) -> Result<()> {
        self.pages += 1;
        Ok(())
    }

    fn create_text(&mut self, _page: &mut (), _text: &ResolvedText) -> Result<()> {
        Ok(())
    }

    fn create_line(&mut self, _page: &mut (), _divider: &Divider) -> Result<()> {
        Ok(())
    }

    fn focus(&mut self, _pages: &[()]) -> Result<()> {
        Ok(())
    }
}

#[test]
fn test_font_failure_aborts_before_layout() {
    let mut host = FailingHost::new(FontStyle::Bold);
    let err = convert("# Title\nbody", "classic", &mut host).unwrap_err();

    match &err {
        Error::FontLoad { family, style, reason } => {
            assert_eq!(family, "Inter");
            assert_eq!(style, "Bold");
            assert!(reason.contains("font not installed"));
        }
        other => panic!("expected font load error, got {:?}", other),
    }
    assert_eq!(host.loaded.len(), 1);
    assert_eq!(host.pages, 0);
    assert!(err.to_string().contains("Inter"));
}

#[test]
fn test_last_font_failure_still_aborts() {
    let mut host = FailingHost::new(FontStyle::BoldItalic);
    assert!(convert("text", "classic", &mut host).is_err());
    assert_eq!(host.loaded.len(), 3);
    assert_eq!(host.pages, 0);
}

#[test]
fn test_command_order() {
    let mut host = ScriptHost::new();
    convert("# A\n---\nbody", "classic", &mut host).unwrap();
    let commands = host.into_commands();

    let ops: Vec<&str> = commands
        .iter()
        .map(|c| match c {
            HostCommand::LoadFont { .. } => "load_font",
            HostCommand::CreatePage { .. } => "create_page",
            HostCommand::CreateText { .. } => "create_text",
            HostCommand::CreateLine { .. } => "create_line",
            HostCommand::Focus { .. } => "focus",
        })
        .collect();
    assert_eq!(
        ops,
        vec![
            "load_font",
            "load_font",
            "load_font",
            "load_font",
            "create_page",
            "create_text",
            "create_line",
            "create_text",
            "focus",
        ]
    );

    let styles: Vec<FontStyle> = commands
        .iter()
        .filter_map(|c| match c {
            HostCommand::LoadFont { font } => Some(font.style),
            _ => None,
        })
        .collect();
    assert_eq!(styles, FontStyle::ALL.to_vec());
    assert_eq!(commands.last(), Some(&HostCommand::Focus { pages: vec![1] }));
}

#[test]
fn test_link_runs_carry_url_and_link_color() {
    let registry = TemplateRegistry::builtin().unwrap();
    let link_color = registry.resolve("classic").colors.link;

    let mut host = ScriptHost::new();
    convert("see [site](https://jane.dev) now", "classic", &mut host).unwrap();

    let text = host
        .commands()
        .iter()
        .find_map(|c| match c {
            HostCommand::CreateText { text, .. } => Some(text.clone()),
            _ => None,
        })
        .unwrap();

    assert_eq!(text.characters(), "see site now");
    let link = &text.runs[1];
    assert_eq!(link.link.as_deref(), Some("https://jane.dev"));
    assert_eq!(link.color, link_color);
    assert_ne!(text.runs[0].color, link_color);
    assert!(text.runs[0].link.is_none());
}

#[test]
fn test_heading_runs_use_bold_faces() {
    let mut host = ScriptHost::new();
    convert("## Skills *and* tools", "modern", &mut host).unwrap();

    let styles: Vec<FontStyle> = host
        .commands()
        .iter()
        .filter_map(|c| match c {
            HostCommand::CreateText { text, .. } => Some(text.runs.iter().map(|r| r.font.style)),
            _ => None,
        })
        .flatten()
        .collect();
    assert_eq!(
        styles,
        vec![FontStyle::Bold, FontStyle::BoldItalic, FontStyle::Bold]
    );
}

#[test]
fn test_two_phase_materialize() {
    let result = Md2Page::new().layout("# A\n- b\n---").unwrap();
    let mut host = ScriptHost::new();
    let handles = result.materialize(&mut host).unwrap();

    assert_eq!(handles, vec![1]);
    let lines = host
        .commands()
        .iter()
        .filter(|c| matches!(c, HostCommand::CreateLine { .. }))
        .count();
    assert_eq!(lines, 1);
}

#[test]
fn test_script_json_replayable() {
    let mut host = ScriptHost::new();
    convert("# A\nbody", "classic", &mut host).unwrap();
    let json = host.to_json(md2page::JsonFormat::Compact).unwrap();
    let back: Vec<HostCommand> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, host.commands());
    assert!(json.contains("\"op\":\"load_font\""));
    assert!(json.contains("\"Bold Italic\""));
}

/// Measures nothing: the canvas behind it is gone.
struct DetachedMeasurer;

impl TextMeasurer for DetachedMeasurer {
    fn natural_size(&self, _runs: &[StyledRun], _style: &TextStyle) -> Result<Size> {
        Err(Error::Host("canvas is detached".to_string()))
    }

    fn wrapped_size(&self, _runs: &[StyledRun], _style: &TextStyle, _width: f32) -> Result<Size> {
        Err(Error::Host("canvas is detached".to_string()))
    }
}

#[test]
fn test_measurement_failure_aborts_before_pages() {
    let mut host = ScriptHost::with_measurer(DetachedMeasurer);
    let err = convert("# Title\nbody", "classic", &mut host).unwrap_err();

    assert!(matches!(err, Error::Host(ref msg) if msg.contains("detached")));
    assert_eq!(host.commands().len(), 4);
    assert!(host
        .commands()
        .iter()
        .all(|c| matches!(c, HostCommand::LoadFont { .. })));
}
