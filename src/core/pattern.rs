//! Compiling Ant-glob strings into [`Pattern`]s and matching them against
//! directories and file names.

use crate::core::error::AntGlobError;
use crate::core::match_type::MatchType;
use crate::core::section::Section;
use crate::core::token::TokenMatcher;

/// A compiled Ant glob.
///
/// `bound_start` is true iff the original glob was anchored to the search
/// root with a leading `/`. `bound_end` is true iff the directory portion
/// ends in a literal component rather than `**`, meaning `file_pattern`
/// applies only to the matched directory itself, not its descendants.
#[derive(Clone, Debug)]
pub struct Pattern {
    bound_start: bool,
    bound_end: bool,
    sections: Vec<Section>,
    file_matcher: TokenMatcher,
    file_is_all: bool,
    case_sensitive: bool,
    rendered: String,
}

impl Pattern {
    /// Compiles a single glob string into one or two patterns (see
    /// invariant 6: a trailing `**` with at least one concrete section
    /// expands into a directory-form and a file-form pattern).
    pub fn compile(glob: &str, case_sensitive: bool) -> Result<Vec<Pattern>, AntGlobError> {
        let elements = simplify(glob)?;
        if elements.len() > 1 && elements.last().map(String::as_str) == Some("**") {
            let full = Pattern::from_elements(&elements, case_sensitive, glob)?;
            let mut promoted_elements = elements.clone();
            promoted_elements.pop();
            let promoted = Pattern::from_elements(&promoted_elements, case_sensitive, glob)?;
            Ok(vec![full, promoted])
        } else {
            Ok(vec![Pattern::from_elements(&elements, case_sensitive, glob)?])
        }
    }

    fn from_elements(
        elements: &[String],
        case_sensitive: bool,
        original: &str,
    ) -> Result<Pattern, AntGlobError> {
        if elements.is_empty() {
            return Err(AntGlobError::InvalidPrecondition(format!(
                "glob {original:?} normalized to an empty element list"
            )));
        }

        let bound_start = elements[0] != "**";

        let mut elements = elements.to_vec();
        let file_pattern_str = if elements.last().map(String::as_str) != Some("**") {
            elements.pop().expect("checked nonempty above")
        } else {
            "*".to_string()
        };

        let bound_end = if elements.is_empty() {
            bound_start
        } else {
            elements.last().map(String::as_str) != Some("**")
        };

        let file_is_all = file_pattern_str == "*";
        let file_matcher = TokenMatcher::new(&file_pattern_str, case_sensitive);

        let mut sections = Vec::new();
        let mut fragment: Vec<TokenMatcher> = Vec::new();
        for element in &elements {
            if element == "**" {
                if !fragment.is_empty() {
                    sections.push(Section::new(std::mem::take(&mut fragment), case_sensitive));
                }
            } else {
                fragment.push(TokenMatcher::new(element, case_sensitive));
            }
        }
        if !fragment.is_empty() {
            sections.push(Section::new(fragment, case_sensitive));
        }

        if bound_start {
            if let Some(first) = sections.first_mut() {
                first.bound_start = true;
            }
        }
        if bound_end {
            if let Some(last) = sections.last_mut() {
                last.bound_end = true;
            }
        }

        let rendered = render(bound_start, bound_end, &sections, &file_pattern_str);

        Ok(Pattern {
            bound_start,
            bound_end,
            sections,
            file_matcher,
            file_is_all,
            case_sensitive,
            rendered,
        })
    }

    /// Classifies how this pattern relates to the directory named by
    /// `path_elements` (components relative to the search root) and its
    /// descendants.
    pub fn match_directory(&self, path_elements: &[String]) -> MatchType {
        if self.sections.is_empty() {
            return if self.bound_start {
                if path_elements.is_empty() {
                    MatchType::MATCH_BUT_NO_SUBDIRECTORIES
                } else {
                    MatchType::NO_MATCH_NO_SUBDIRECTORIES
                }
            } else {
                MatchType::MATCH_ALL_SUBDIRECTORIES
            };
        }
        self.match_recurse(true, &self.sections, path_elements, 0)
    }

    fn match_recurse(
        &self,
        is_start: bool,
        sections: &[Section],
        path_elements: &[String],
        location: usize,
    ) -> MatchType {
        match sections.split_first() {
            Some((section, rest)) => {
                let mut any_match = false;
                for end in section.match_iter(path_elements, location) {
                    any_match = true;
                    let result = self.match_recurse(false, rest, path_elements, end);
                    if result.is_match() {
                        return result;
                    }
                }

                if is_start && self.bound_start && !any_match {
                    if path_elements.len() >= section.len() {
                        MatchType::NO_MATCH_NO_SUBDIRECTORIES
                    } else {
                        if section.len() > path_elements.len() && !path_elements.is_empty() {
                            let idx = path_elements.len() - 1;
                            if !section
                                .element(idx)
                                .matches(&path_elements[idx], self.case_sensitive)
                            {
                                return MatchType::NO_MATCH_NO_SUBDIRECTORIES;
                            }
                        }
                        MatchType::NO_MATCH
                    }
                } else {
                    MatchType::NO_MATCH
                }
            }
            None => {
                if self.sections.len() == 1 && self.bound_start && self.bound_end {
                    MatchType::MATCH_BUT_NO_SUBDIRECTORIES
                } else if self.bound_end {
                    MatchType::MATCH
                } else {
                    MatchType::MATCH_ALL_SUBDIRECTORIES
                }
            }
        }
    }

    /// True iff this pattern's terminal file matcher accepts every name.
    pub fn all_files(&self) -> bool {
        self.file_is_all
    }

    /// Moves every name in `unmatched` accepted by this pattern's file
    /// matcher into `matched`. `matched` and `unmatched` stay disjoint.
    pub fn match_files(&self, matched: &mut std::collections::HashSet<String>, unmatched: &mut std::collections::HashSet<String>) {
        let accepted: Vec<String> = unmatched
            .iter()
            .filter(|name| self.file_matcher.matches(name, self.case_sensitive))
            .cloned()
            .collect();
        for name in accepted {
            unmatched.remove(&name);
            matched.insert(name);
        }
    }

    pub fn bound_start(&self) -> bool {
        self.bound_start
    }

    pub fn bound_end(&self) -> bool {
        self.bound_end
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rendered)
    }
}

fn render(bound_start: bool, bound_end: bool, sections: &[Section], file_pattern: &str) -> String {
    if sections.is_empty() {
        let end = if bound_end { "" } else { "**" };
        format!("{end}/{file_pattern}")
    } else {
        let start = if bound_start { "/" } else { "**/" };
        let body = sections
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("/**/");
        let end = if bound_end { "" } else { "/**" };
        format!("{start}{body}{end}/{file_pattern}")
    }
}

/// Normalizes a raw glob string into its element list, per spec.md's
/// normalization invariants 1-4: trailing `/` becomes `/**`, `.` is dropped,
/// repeated `**` collapse, `..` is rejected, and the list always begins with
/// either the literal first component of an anchored glob or (for a
/// floating glob) an explicit `**`.
fn simplify(glob: &str) -> Result<Vec<String>, AntGlobError> {
    let leading_slash = matches!(glob.chars().next(), Some('/') | Some('\\'));
    let trailing_slash = matches!(glob.chars().last(), Some('/') | Some('\\'));

    let mut elements: Vec<String> = Vec::new();
    for component in glob.split(['/', '\\']).filter(|c| !c.is_empty()) {
        if component == ".." {
            return Err(AntGlobError::InvalidGlob {
                glob: glob.to_string(),
                reason: "cannot contain '..'".to_string(),
            });
        } else if component == "." {
            continue;
        } else if component == "**" {
            if elements.last().map(String::as_str) == Some("**") {
                continue;
            }
            elements.push("**".to_string());
        } else {
            elements.push(component.to_string());
        }
    }

    if trailing_slash && elements.last().map(String::as_str) != Some("**") {
        elements.push("**".to_string());
    }
    if elements.is_empty() {
        elements.push("**".to_string());
    }
    if !leading_slash && elements[0] != "**" {
        elements.insert(0, "**".to_string());
    }

    Ok(elements)
}
