use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedSource {
    pub module: Module,
    pub source_map: SourceMap,
    /// Offset of the file inside the source map. Spans are global, so this
    /// is subtracted to get file-relative byte offsets.
    pub start_pos: BytePos,
}

/// Parse JS/JSX/TS/TSX source code into an AST.
pub fn parse_source(code: &str, file_path: &str) -> Result<ParsedSource> {
    let source_map = SourceMap::default();
    let source_file =
        source_map.new_source_file(FileName::Real(file_path.into()).into(), code.to_string());

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
    let module = parser
        .parse_module()
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(ParsedSource {
        module,
        source_map,
        start_pos: source_file.start_pos,
    })
}
