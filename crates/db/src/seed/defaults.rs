//! Default site content inserted on first start.

use crate::models::banner::UpdateConstructionBanner;
use crate::models::equipment::CreateEquipment;
use crate::models::process_step::CreateProcessStep;
use crate::models::project::CreateProject;
use crate::models::service::CreateService;
use crate::models::testimonial::CreateTestimonial;

pub fn services() -> Vec<CreateService> {
    [
        (
            "Laser Cutting",
            "Precision laser cutting for metal, acrylic, and wood. Perfect for intricate designs and clean edges.",
            "Scissors",
        ),
        (
            "CNC Machining",
            "Computer-controlled precision machining for complex parts and prototypes.",
            "Cog",
        ),
        (
            "3D Printing",
            "Rapid prototyping and custom parts using advanced 3D printing technology.",
            "Box",
        ),
        (
            "Welding & Fabrication",
            "Professional welding services for structural and decorative metalwork.",
            "Flame",
        ),
        (
            "Metal Finishing",
            "Powder coating, anodizing, and polishing for perfect surface treatments.",
            "Sparkles",
        ),
        (
            "Custom Design",
            "Work with our team to bring your unique ideas to life with expert design assistance.",
            "Pencil",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, description, icon))| CreateService {
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
        image_url: None,
        order: (i + 1).to_string(),
    })
    .collect()
}

pub fn projects() -> Vec<CreateProject> {
    [
        (
            "Precision Industrial Components",
            "Industrial",
            "CNC machined aluminum parts with tight tolerances for aerospace application.",
            "/assets/generated_images/CNC_machined_industrial_part_f29ddd5e.png",
            &["CNC", "Aluminum", "Aerospace"],
        ),
        (
            "Decorative Metal Panel",
            "Art",
            "Custom laser-cut architectural metalwork for commercial interior design project.",
            "/assets/generated_images/Laser_cut_artistic_panel_cfaed520.png",
            &["Laser Cutting", "Art", "Architecture"],
        ),
        (
            "Functional Prototype Assembly",
            "Prototype",
            "3D printed mechanical assembly for product development testing and validation.",
            "/assets/generated_images/3D_printed_prototype_assembly_34122b60.png",
            &["3D Printing", "Prototype", "Engineering"],
        ),
        (
            "Structural Steel Framework",
            "Industrial",
            "Heavy-duty welded steel frame for industrial machinery installation.",
            "/assets/generated_images/Welded_steel_frame_structure_0594cf3b.png",
            &["Welding", "Steel", "Heavy Fabrication"],
        ),
        (
            "Custom Brass Hardware",
            "Art",
            "Precision-machined brass and copper components for luxury furniture line.",
            "/assets/generated_images/Custom_brass_hardware_components_ba9605f9.png",
            &["CNC", "Brass", "Luxury"],
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, category, description, image_url, tags))| CreateProject {
        title: title.into(),
        category: category.into(),
        description: description.into(),
        image_url: image_url.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        order: (i + 1).to_string(),
    })
    .collect()
}

pub fn equipment() -> Vec<CreateEquipment> {
    [
        ("Fiber Laser Cutter", "4' x 8' bed, cuts steel up to 1/2\""),
        ("5-Axis CNC Mill", "Tolerances to +/- 0.001\""),
        ("Industrial 3D Printers", "FDM and SLA, build volume up to 500 mm"),
        ("MIG & TIG Welding", "Steel, stainless, and aluminum"),
        ("Powder Coating Booth", "Parts up to 10' long"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, spec))| CreateEquipment {
        label: label.into(),
        spec: spec.into(),
        image_url: None,
        order: (i + 1).to_string(),
    })
    .collect()
}

pub fn process_steps() -> Vec<CreateProcessStep> {
    [
        (
            "Consultation",
            "Discuss your project requirements, materials, timeline, and budget with our team.",
            "MessageSquare",
        ),
        (
            "Design",
            "We review your designs or help create technical drawings optimized for fabrication.",
            "Pencil",
        ),
        (
            "Fabrication",
            "Your project comes to life using precision equipment and expert craftsmanship.",
            "Wrench",
        ),
        (
            "Delivery",
            "Quality inspection, finishing touches, and delivery to your specifications.",
            "Truck",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, description, icon))| CreateProcessStep {
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
        order: (i + 1).to_string(),
    })
    .collect()
}

pub fn testimonials() -> Vec<CreateTestimonial> {
    [
        (
            "The precision and attention to detail on our aerospace components exceeded our stringent requirements. Maker's Lab delivered flawless parts on time.",
            "Sarah Chen",
            "AeroTech Industries",
            "Aerospace Components",
        ),
        (
            "Their laser cutting transformed our architectural vision into reality. The custom metalwork added the perfect industrial elegance to our space.",
            "Michael Rodriguez",
            "Studio AR",
            "Commercial Interior",
        ),
        (
            "From rapid prototyping to final production parts, the team's expertise in 3D printing saved us months of development time. Exceptional service.",
            "Jennifer Walsh",
            "InnovateTech",
            "Product Development",
        ),
        (
            "Outstanding craftsmanship on our custom furniture hardware. The brass and copper work is museum-quality. Highly recommend for luxury projects.",
            "David Kim",
            "Artisan Furniture Co.",
            "Luxury Hardware",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (quote, author, company, project))| CreateTestimonial {
        quote: quote.into(),
        author: author.into(),
        company: company.into(),
        project: project.into(),
        avatar_url: None,
        order: (i + 1).to_string(),
    })
    .collect()
}

/// The banner starts out disabled with the stock copy.
pub fn banner() -> UpdateConstructionBanner {
    UpdateConstructionBanner {
        enabled: Some(false),
        ..Default::default()
    }
}
