//! Hand-authored examples written to a fresh store on first run.

use std::collections::BTreeMap;

use crate::models::content_type::ContentType;
use crate::models::example::Example;

struct SeedExample {
    topic: &'static str,
    tone: &'static str,
    target_audience: &'static str,
    content: &'static str,
}

const AD_COPY: &[SeedExample] = &[
    SeedExample {
        topic: "running shoes",
        tone: "energetic",
        target_audience: "athletes",
        content: "🏃‍♂️ Run Faster, Feel Lighter. Our cloud-foam technology makes every step feel like flying. 30-day comfort guarantee or your money back!",
    },
    SeedExample {
        topic: "coffee subscription",
        tone: "warm",
        target_audience: "coffee lovers",
        content: "☕ Fresh beans delivered before you wake up. Ethically sourced from local farmers. Roasted to order. Your perfect morning starts here. First bag free!",
    },
    SeedExample {
        topic: "accounting software",
        tone: "professional",
        target_audience: "small business owners",
        content: "Cut your bookkeeping time by 70%. Automated invoicing, expense tracking, and tax reports. Trusted by 50,000+ small businesses. Start free trial today.",
    },
];

const EMAIL_CAMPAIGNS: &[SeedExample] = &[SeedExample {
    topic: "product launch",
    tone: "excited",
    target_audience: "existing customers",
    content: "Subject: It's here (and selling out fast!)

Hey [Name],

Remember when you said you wished [problem]?

After 18 months of development, the ProX is finally here. It does exactly what you asked for—and more.

Early access members get 20% off for the next 48 hours only.

[Claim Your Discount]

Cheers,
The Team

P.S. Only 100 units available at this price.",
}];

const SOCIAL_MEDIA: &[SeedExample] = &[SeedExample {
    topic: "fitness app",
    tone: "motivational",
    target_audience: "busy professionals",
    content: "Transform your commute into a workout 🚴‍♀️

5-minute exercises you can do anywhere:
• On the bus
• In your office
• While watching TV

No equipment needed. No excuses.

What's your biggest barrier to working out? 👇

#Fitness #QuickWorkout #HealthyLife #NoExcuses",
}];

const BLOG_POSTS: &[SeedExample] = &[SeedExample {
    topic: "productivity tips",
    tone: "helpful",
    target_audience: "professionals",
    content: "# 5 Productivity Hacks That Actually Work

## Introduction
We all have the same 24 hours. Why do some people get 10x more done? It's not about working harder—it's about working smarter.

## 1. The 2-Minute Rule
If something takes less than 2 minutes, do it now. Don't add it to a list.

## 2. Time Blocking
Schedule every minute of your day. Yes, including breaks.

## 3. Eliminate Decision Fatigue
Steve Jobs wore the same outfit daily. Reduce trivial choices.

## Conclusion
Pick ONE hack to implement this week. Master it before adding others.

What's your favorite productivity tip? Share below!",
}];

const PRODUCT_DESCRIPTIONS: &[SeedExample] = &[SeedExample {
    topic: "wireless headphones",
    tone: "luxurious",
    target_audience: "tech enthusiasts",
    content: "Experience silence like never before. 

Active noise cancellation blocks 95% of ambient sound—perfect for focus at work or peace on your commute.

40-hour battery life means you charge once a week, not daily.

Memory foam ear cups mold to your ears for all-day comfort.

⭐⭐⭐⭐⭐ \"Best headphones under $200\" - TechReview

Perfect for: Commuters, remote workers, audiophiles who value comfort.",
}];

fn seeds_for(content_type: ContentType) -> &'static [SeedExample] {
    match content_type {
        ContentType::AdCopy => AD_COPY,
        ContentType::EmailCampaigns => EMAIL_CAMPAIGNS,
        ContentType::SocialMedia => SOCIAL_MEDIA,
        ContentType::BlogPosts => BLOG_POSTS,
        ContentType::ProductDescriptions => PRODUCT_DESCRIPTIONS,
    }
}

/// Builds the default collection: at least one example for every content type.
pub fn default_examples() -> BTreeMap<String, Vec<Example>> {
    ContentType::ALL
        .into_iter()
        .map(|ct| {
            let examples = seeds_for(ct)
                .iter()
                .map(|seed| {
                    Example::new(
                        seed.content,
                        BTreeMap::from([
                            ("topic".to_string(), seed.topic.to_string()),
                            ("tone".to_string(), seed.tone.to_string()),
                            ("target_audience".to_string(), seed.target_audience.to_string()),
                        ]),
                    )
                })
                .collect();
            (ct.as_str().to_string(), examples)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_content_type_is_seeded() {
        let seeds = default_examples();
        for ct in ContentType::ALL {
            let examples = seeds.get(ct.as_str()).expect("category missing from seed");
            assert!(!examples.is_empty(), "{ct} has no seed examples");
        }
    }

    #[test]
    fn test_ad_copy_seed_order_is_stable() {
        let seeds = default_examples();
        let tones: Vec<_> = seeds["ad_copy"].iter().filter_map(|e| e.tone()).collect();
        assert_eq!(tones, vec!["energetic", "warm", "professional"]);
    }
}
