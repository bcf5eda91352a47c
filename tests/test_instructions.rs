use recipe_cookbook::instructions::{format_text, NO_INSTRUCTIONS};
use recipe_cookbook::{clean_instructions, format_for_viewer, format_instructions, Instructions};

#[test]
fn test_format_step_list() {
    let steps = Instructions::from(vec![
        "Preheat oven".to_string(),
        "Mix batter".to_string(),
        "Bake".to_string(),
    ]);
    assert_eq!(
        format_instructions(Some(&steps)),
        "1. Preheat oven\n\n2. Mix batter\n\n3. Bake"
    );
}

#[test]
fn test_format_inline_numbered_text() {
    let text = Instructions::from("1. Preheat oven. 2. Mix batter. 3. Bake.".to_string());
    let formatted = format_instructions(Some(&text));

    let steps: Vec<&str> = formatted.split("\n\n").collect();
    assert_eq!(steps.len(), 3);
    assert!(steps[0].starts_with("1. Preheat oven"));
    assert!(steps[1].starts_with("2. Mix batter"));
    assert!(steps[2].starts_with("3. Bake"));
}

#[test]
fn test_format_nothing() {
    assert_eq!(format_instructions(None), "No instructions found");
    assert_eq!(format_text(""), NO_INSTRUCTIONS);
    assert_eq!(format_for_viewer(None), NO_INSTRUCTIONS);
}

#[test]
fn test_viewer_path_with_only_boilerplate() {
    let text = Instructions::from("Photo by: Someone\nCredit: Agency".to_string());
    assert_eq!(format_for_viewer(Some(&text)), NO_INSTRUCTIONS);
    // the save-time path doesn't clean
    assert_ne!(format_instructions(Some(&text)), NO_INSTRUCTIONS);
}

#[test]
fn test_clean_removes_photographer_line() {
    let cleaned = clean_instructions("Step one.\nPhotographer: Jane Doe\nStep two.");
    assert_eq!(cleaned, "Step one.\n\nStep two.");
}

#[test]
fn test_clean_realistic_scrape() {
    let scraped = "\
Preheat the oven to 400 degrees F.

Dotdash Meredith Food Studios
Photographer: Dotdash Meredith, Food Styling: Someone


Toss the potatoes with oil and salt.
* Percent Daily Values are based on a 2,000 calorie diet. Your daily values may be higher or lower depending on your calorie needs. *
Original recipe (1X) yields 4 servings
Get recipe help
Roast for 35 minutes.
We process your data to deliver content or advertisements and measure the delivery of such content
These cookies are used to collect information about how you interact with our website.";

    assert_eq!(
        clean_instructions(scraped),
        "Preheat the oven to 400 degrees F.\n\nDotdash Meredith Food Studios\n\nToss the potatoes with oil and salt.\n\nRoast for 35 minutes."
    );
}

#[test]
fn test_clean_is_idempotent() {
    let inputs = [
        "",
        "   ",
        "Just cook it.",
        "Step one.\nPhotographer: Jane Doe\nStep two.",
        "Mix.\n\n\n\n  \n\nServe.",
        "Photo *Nutrient information x* by: Jane\nStir.",
        "Recipe\nPhotographer: X\nby: Y",
        "* Percent Daily Values *\n* If you are following a diet *\nEnjoy!",
        "Credit: a\nCredit: b\n\n\nCredit: c\nFinish.",
    ];

    for input in inputs {
        let once = clean_instructions(input);
        assert_eq!(clean_instructions(&once), once, "input: {input:?}");
    }
}
