//! Built-in sample passages.
//!
//! Each passage leans on at least one vocabulary term, so any of them can be
//! fed straight to [`Tester::run_test`](crate::Tester::run_test) when the user
//! supplies no text.

/// Sample passages, in a stable order.
pub const SAMPLE_TEXTS: &[&str] = &[
    "“Our long-term vision centers on driving transformation across all business units.
Through continuous transformation initiatives, we aim to build a culture that embraces transformation
as a core organizational value.”
",
    "The Faculty is committed to fostering excellence in teaching and excellence in interdisciplinary
collaboration to meet future challenges.
",
    "Research agencies increasingly emphasize innovation as a central criterion in evaluating proposals.
Applicants are expected to demonstrate how their work contributes to innovation within their field and
how planned activities reflect an innovative research culture. Yet the term often appears without a clear
definition, leaving researchers unsure how to articulate innovation in a way that resonates with reviewers.
Our workshop Navigating Innovation examines how funding bodies deploy the concept, how applicants can
meaningfully situate their projects within innovation frameworks, and how innovation narratives can
strengthen the overall structure of a proposal.
",
    "Our university is committed to generating impact across research,
teaching, and outreach. Departments are encouraged to develop strategies that
maximise impact and demonstrate impact pathways aligned with institutional priorities.
To support this effort, we provide training on crafting convincing impact narratives
at every stage of the research lifecycle.
",
    "The lab focuses on innovation and excellence in scientific research.
Researchers are encouraged to explore innovative methodologies and document
their innovation outcomes carefully.",
    "Open Science initiatives are central to our institution's mission.
Faculty and students collaborate to ensure research transparency and accessibility.",
    "Responsible Research practices are embedded in every project.
Training programs emphasize ethics, reproducibility, and societal impact.",
    "Our national digital agenda places transformation at the core of future public-service delivery. By cultivating a shared understanding of transformation across agencies, we aim to build interoperable systems that respond more flexibly to citizens’ needs. Transformation, in this sense, is not limited to technical upgrades but extends to a broader cultural readiness to engage with new possibilities.

To secure long-term stability, each ministry will define its own transformation roadmap. These roadmaps will guide investment decisions, inform workforce training goals, and ensure that transformation remains aligned with our overarching commitment to inclusivity and economic competitiveness.
",
    "This year, we placed renewed emphasis on resilience as a guiding principle across our value chain. By strengthening resilience in our supplier ecosystem and promoting resilience-focused decision-making within our leadership teams, we aim to navigate uncertain economic conditions with greater confidence.

Our forward-looking plan includes embedding resilience metrics into quarterly reviews and ensuring all operational units align with our enterprise-wide resilience framework. This approach allows us to maintain agility, uphold stakeholder expectations, and prepare proactively for emerging challenges.
",
    "The Future Learning Initiative is grounded in our commitment to academic excellence. Excellence guides our pedagogical choices, shapes curriculum development, and informs our investment in state-of-the-art learning environments. By creating structures that cultivate excellence, we enable students to engage more deeply with complex global issues.

In the coming years, the Initiative will expand interdisciplinary collaborations, strengthen links between research and teaching, and support innovative assessment models. These efforts will ensure that excellence remains central to how our faculty conceptualizes education in an evolving world.
",
];
