/// Script contexts a host may compile scripts for. Only [`ScriptContext::Score`] is served here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptContext {
    Score,
    Filter,
    Aggregation,
    Update,
    Ingest,
}

impl ScriptContext {
    pub fn name(&self) -> &'static str {
        match self {
            ScriptContext::Score => "score",
            ScriptContext::Filter => "filter",
            ScriptContext::Aggregation => "aggs",
            ScriptContext::Update => "update",
            ScriptContext::Ingest => "ingest",
        }
    }
}
