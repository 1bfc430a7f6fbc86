use anyhow::{Result, anyhow};
use swc_common::{FileName, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed component file: the module AST plus the source map needed to
/// turn spans back into 1-based line numbers for reporting.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: SourceMap,
}

impl std::fmt::Debug for ParsedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // SourceMap does not implement Debug.
        f.debug_struct("ParsedSource")
            .field("module", &self.module)
            .finish_non_exhaustive()
    }
}

/// Parse JSX/TSX source code into an AST.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedSource> {
    let source_map = SourceMap::default();
    let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
    let module = parser
        .parse_module()
        .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

    // Recoverable syntax errors are buffered instead of returned.
    let errors = parser.take_errors();
    if let Some(error) = errors.first() {
        return Err(anyhow!("Failed to parse {}: {:?}", file_path, error));
    }
    Ok(ParsedSource { module, source_map })
}
