/// 模型輸出的截斷標記
pub const AD_SENTINEL: &str = "### END";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdExample {
    pub product: &'static str,
    pub theme: &'static str,
    pub copy: &'static str,
}

// 順序與文字都會影響模型輸出，不要調整
pub const AD_EXAMPLES: [AdExample; 10] = [
    AdExample {
        product: "Running shoes",
        theme: "Sporty",
        copy: "Step into comfort and style with our new running shoes, designed for champions. Perfect for every stride.",
    },
    AdExample {
        product: "Organic face cream",
        theme: "Natural beauty",
        copy: "Reveal your natural glow with our organic face cream. Pure ingredients for radiant, healthy skin.",
    },
    AdExample {
        product: "Female underwear",
        theme: "Classy",
        copy: "Discover elegance and comfort with our premium female underwear collection. Designed to make you feel confident and classy every day.",
    },
    AdExample {
        product: "Shapewear",
        theme: "Body positivity",
        copy: "Introducing our new shapewear line that celebrates every curve. Feel confident and comfortable in your own skin.",
    },
    AdExample {
        product: "Lingerie",
        theme: "Confidence",
        copy: "Unleash your inner confidence with our luxurious lingerie. Perfect for every occasion, made for every woman.",
    },
    AdExample {
        product: "Silk robe",
        theme: "Luxury",
        copy: "Wrap yourself in pure luxury with our silk robes. The perfect blend of comfort and sophistication.",
    },
    AdExample {
        product: "Eco-friendly water bottle",
        theme: "Sustainability",
        copy: "Stay hydrated and save the planet, one sip at a time.",
    },
    AdExample {
        product: "Smartwatch",
        theme: "Innovation",
        copy: "Stay connected, track your health, and never miss a beat.",
    },
    AdExample {
        product: "Yoga mat",
        theme: "Wellness",
        copy: "Find your balance and flow with our premium yoga mats.",
    },
    AdExample {
        product: "Vegan chocolate",
        theme: "Indulgence",
        copy: "Satisfy your sweet tooth with our rich, dairy-free vegan chocolate.",
    },
];

fn render_example(out: &mut String, example: &AdExample) {
    out.push_str("Product: ");
    out.push_str(example.product);
    out.push_str("\nTheme: ");
    out.push_str(example.theme);
    out.push_str("\nAd Copy: ");
    out.push_str(example.copy);
    out.push_str("\n\n");
}

/// 組出 few-shot 廣告 prompt：十個範例、使用者輸入，最後接上截斷標記。
///
/// 不做任何輸入檢查，空字串也照樣組裝。
pub fn build_ad_prompt(product_description: &str, theme: &str) -> String {
    let mut prompt = String::with_capacity(2048);

    for example in AD_EXAMPLES.iter() {
        render_example(&mut prompt, example);
    }

    prompt.push_str("Product: ");
    prompt.push_str(product_description);
    prompt.push_str("\nTheme: ");
    prompt.push_str(theme);
    prompt.push_str("\nAd Copy:");
    prompt.push('\n');
    prompt.push_str(AD_SENTINEL);

    prompt
}
