//! Prompt assembly from static per-type templates

use crate::types::ExtractionType;

/// Template for the summary extraction type
const SUMMARY_TEMPLATE: &str = "\
Analyze this article and provide a comprehensive yet concise summary. Focus on:
1. **Main Topic**: What is this article primarily about?
2. **Key Insights**: What are the most important findings or points?
3. **Supporting Evidence**: Key facts, statistics, or examples
4. **Implications**: What does this mean or why does it matter?

Make it informative but easy to understand. Article content:

";

/// Template for the key_points extraction type
const KEY_POINTS_TEMPLATE: &str = "\
Extract the most important points from this article as a well-organized bulleted list.
Focus on actionable insights, key facts, and main arguments. Format as:

- **Point 1**: Brief explanation
- **Point 2**: Brief explanation

Article content:

";

/// Template for the structured extraction type
const STRUCTURED_TEMPLATE: &str = "\
Extract and organize the important information from this article using this structure:

## Article Summary
**Topic**: [Main subject]
**Key Thesis**: [Main argument or point]

## Main Points
- [Point 1]
- [Point 2]
- [Point 3]

## Key Facts & Data
- [Important statistics or facts]

## Key Takeaways
- [What readers should remember]

## Important Context
- [Background information or implications]

Article content:

";

/// Template for the entities extraction type
const ENTITIES_TEMPLATE: &str = "\
Extract and categorize important entities and information from this article:

## People & Roles
- [Names and their roles/significance]

## Organizations & Companies
- [Companies, institutions, groups mentioned]

## Locations
- [Places, countries, cities mentioned]

## Important Dates & Timeline
- [Key dates and time periods]

## Numbers & Statistics
- [Important figures, percentages, measurements]

## Topics & Keywords
- [Main subjects and themes discussed]

Article content:

";

/// Static template for an extraction type
///
/// The closed enum makes an unrecognized type unrepresentable, so the
/// lookup is a total match.
pub fn template(extraction_type: ExtractionType) -> &'static str {
    match extraction_type {
        ExtractionType::Summary => SUMMARY_TEMPLATE,
        ExtractionType::KeyPoints => KEY_POINTS_TEMPLATE,
        ExtractionType::Structured => STRUCTURED_TEMPLATE,
        ExtractionType::Entities => ENTITIES_TEMPLATE,
    }
}

/// Assemble the final prompt: template, optional title prefix, content
pub fn build_prompt(extraction_type: ExtractionType, title: &str, content: &str) -> String {
    let mut prompt = String::with_capacity(
        template(extraction_type).len() + title.len() + content.len() + 32,
    );
    prompt.push_str(template(extraction_type));
    if !title.is_empty() {
        prompt.push_str("Article Title: ");
        prompt.push_str(title);
        prompt.push_str("\n\n");
    }
    prompt.push_str(content);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_starts_with_template_for_every_type() {
        for ty in ExtractionType::ALL {
            let prompt = build_prompt(ty, "Title", "Content");
            assert!(
                prompt.starts_with(template(ty)),
                "prompt for {} does not start with its template",
                ty
            );
        }
    }

    #[test]
    fn test_templates_are_distinct() {
        let templates: Vec<&str> = ExtractionType::ALL.iter().map(|ty| template(*ty)).collect();
        for (i, a) in templates.iter().enumerate() {
            for b in templates.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_title_prefix_present_when_title_non_empty() {
        let prompt = build_prompt(ExtractionType::Summary, "My Article", "Body text");
        assert!(prompt.contains("Article Title: My Article\n\n"));
        assert!(prompt.ends_with("Body text"));
    }

    #[test]
    fn test_no_title_prefix_when_title_empty() {
        let prompt = build_prompt(ExtractionType::KeyPoints, "", "Body text");
        assert!(!prompt.contains("Article Title:"));
        assert!(prompt.ends_with("Body text"));
    }

    #[test]
    fn test_order_is_template_then_title_then_content() {
        let prompt = build_prompt(ExtractionType::Entities, "T", "C");
        let template_end = template(ExtractionType::Entities).len();
        assert_eq!(&prompt[template_end..], "Article Title: T\n\nC");
    }
}
