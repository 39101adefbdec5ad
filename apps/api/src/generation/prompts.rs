// All LLM prompt constants for the generation module.

/// System role sent with every generation call.
pub const SEO_WRITER_SYSTEM: &str = "You are a professional SEO content writer.";

/// Blog post prompt template.
/// Replace: {keyword}, {search_volume}, {keyword_difficulty}, {avg_cpc}
///
/// The `{AFF_LINK_n}` tokens are part of the instructions, not template
/// slots — the model is asked to emit them literally so the generator can
/// substitute affiliate URLs afterwards.
pub const BLOG_POST_PROMPT_TEMPLATE: &str = r#"Write a comprehensive blog post about {keyword}.
Include the following information:
- Search Volume: {search_volume}
- Keyword Difficulty: {keyword_difficulty}
- Average CPC: ${avg_cpc}

The post should:
1. Be well-structured with H1, H2, and H3 headings
2. Include an introduction, main sections, and conclusion
3. Be informative and engaging
4. Include 3 affiliate link placeholders using {AFF_LINK_1}, {AFF_LINK_2}, and {AFF_LINK_3}
5. Be at least 1000 words long
6. Include a meta description
7. Be written in HTML format

Format the response in HTML with proper tags."#;
