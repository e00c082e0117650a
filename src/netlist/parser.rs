//! Line parser for saved netlists.

use crate::circuit::{validate_node, validate_value, NodeId, MAX_NODES};
use crate::components::ComponentKind;
use crate::error::{NodalError, Result};
use crate::util::parse_value;

/// One component line of a netlist.
#[derive(Debug, Clone, PartialEq)]
pub struct NetlistEntry {
    pub kind: ComponentKind,
    /// Id recorded in the file. Loading assigns fresh ids.
    pub saved_id: usize,
    pub value: f64,
    pub nodes: [NodeId; 2],
    /// 1-based source line
    pub line: usize,
}

/// A parsed netlist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Netlist {
    /// Value of the `# node_count <N>` header, if present
    pub node_count: Option<usize>,
    pub entries: Vec<NetlistEntry>,
}

/// Parse netlist text.
///
/// Every entry is validated before anything is returned, so applying the
/// result to a circuit cannot fail half way.
pub fn parse_netlist(input: &str) -> Result<Netlist> {
    let mut netlist = Netlist::default();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }

        if let Some(comment) = text.strip_prefix('#') {
            if let Some(count) = parse_header(comment, line)? {
                netlist.node_count = Some(count);
            }
            continue;
        }

        netlist.entries.push(parse_entry(text, line)?);
    }

    Ok(netlist)
}

/// Recognise `node_count <N>` inside a comment; other comments are ignored.
fn parse_header(comment: &str, line: usize) -> Result<Option<usize>> {
    let mut fields = comment.split_whitespace();
    if fields.next() != Some("node_count") {
        return Ok(None);
    }
    let count = fields
        .next()
        .and_then(|f| f.parse::<usize>().ok())
        .ok_or_else(|| NodalError::netlist_parse(line, "node_count header needs a count"))?;
    if count > MAX_NODES {
        return Err(NodalError::netlist_parse(
            line,
            format!("node_count {count} exceeds the limit of {MAX_NODES}"),
        ));
    }
    Ok(Some(count))
}

fn parse_entry(text: &str, line: usize) -> Result<NetlistEntry> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() < 5 {
        return Err(NodalError::netlist_parse(
            line,
            format!(
                "expected '<type> <id> <value> <node+> <node->', found {} field(s)",
                fields.len()
            ),
        ));
    }

    let mut letters = fields[0].chars();
    let kind = match (letters.next(), letters.next()) {
        (Some(letter), None) => ComponentKind::from_letter(letter),
        _ => None,
    }
    .ok_or_else(|| {
        NodalError::netlist_parse(line, format!("unknown component type '{}'", fields[0]))
    })?;

    let saved_id = fields[1]
        .parse::<usize>()
        .map_err(|_| NodalError::netlist_parse(line, format!("invalid id '{}'", fields[1])))?;

    let value =
        parse_value(fields[2]).map_err(|e| NodalError::netlist_parse(line, e.to_string()))?;
    validate_value(kind, value).map_err(|e| NodalError::netlist_parse(line, e.to_string()))?;

    let node_pos = parse_node(fields[3], line)?;
    let node_neg = parse_node(fields[4], line)?;

    Ok(NetlistEntry {
        kind,
        saved_id,
        value,
        nodes: [node_pos, node_neg],
        line,
    })
}

fn parse_node(field: &str, line: usize) -> Result<NodeId> {
    let index = field
        .parse::<i64>()
        .map_err(|_| NodalError::netlist_parse(line, format!("invalid node '{field}'")))?;
    let node = NodeId::try_from(index)
        .and_then(|node| validate_node(node).map(|()| node))
        .map_err(|e| NodalError::netlist_parse(line, e.to_string()))?;
    Ok(node)
}
