// prompts.rs

pub fn article_prompt(target_keyword: &str, search_intent: &str) -> String {
    format!(
        "
    あなたはプロのSEOライターです。以下のキーワードと検索意図に基づき、SEOで上位表示を目指す記事全体をJSON形式で生成してください。
    【キーワード】: {}
    【検索意図】: {}
    
    【ルール】
    1.  記事の本文は合計2000文字以上とし、網羅性を高めてください。
    2.  H2, H3見出しを使って本文を構造化し、Markdown形式で記述してください。
    
    【出力形式】
    {{
        \"title\": \"記事のSEOタイトル (35文字以内)\",
        \"meta_description\": \"記事のメタディスクリプション (120文字以内)\",
        \"body_markdown\": \"## 導入\n本文...\n## 2026年の主要トレンド\n本文...\n\"
    }}
    ",
        target_keyword, search_intent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_keyword_and_intent() {
        let prompt = article_prompt("キーワードA", "意図B");
        assert!(prompt.contains("【キーワード】: キーワードA"));
        assert!(prompt.contains("【検索意図】: 意図B"));
    }

    #[test]
    fn prompt_spells_out_the_expected_json_fields() {
        let prompt = article_prompt("k", "i");
        assert!(prompt.contains("\"title\""));
        assert!(prompt.contains("\"meta_description\""));
        assert!(prompt.contains("\"body_markdown\""));
        assert!(prompt.contains("JSON形式"));
    }
}
