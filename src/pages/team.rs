use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::content::team::{TeamMember, TEAM};
use crate::pages::shared::{stagger, CtaBanner, PageHero};

#[derive(Properties, PartialEq)]
struct MemberCardProps {
    member: &'static TeamMember,
}

#[function_component(MemberCard)]
fn member_card(props: &MemberCardProps) -> Html {
    let member = props.member;
    html! {
        <div class="card member-card text-center">
            <div class="member-avatar">{ member.initials() }</div>
            <h3>{ member.name }</h3>
            <p class="accent member-role">{ member.role }</p>
            <p class="muted">{ member.bio }</p>
            <div class="member-social">
                { for member.social.entries().into_iter().map(|(label, icon_class, href)| html! {
                    <a
                        {href}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label={format!("{}'s {}", member.name, label)}
                    >
                        <i class={icon_class} aria-hidden="true"></i>
                    </a>
                }) }
            </div>
        </div>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <div class="team-page">
            <PageHero
                tag="Our Team"
                title="Meet the"
                accent="Experts"
                lead="Our talented team of professionals is dedicated to delivering exceptional results for every project."
            />
            <section class="section">
                <div class="container grid-4">
                    { for TEAM.iter().enumerate().map(|(i, member)| html! {
                        <AnimatedSection delay={stagger(i, 0.1)}>
                            <MemberCard {member} />
                        </AnimatedSection>
                    }) }
                </div>
            </section>
            <CtaBanner
                title="Want to Join Our Team?"
                text="We're always looking for talented individuals to join our growing team. Check out our open positions."
                button="View Careers"
            />
            <style>
                {r#"
                .member-avatar {
                    width: 96px;
                    height: 96px;
                    margin: 0 auto 1.25rem;
                    border-radius: 50%;
                    background: rgba(250, 255, 1, 0.15);
                    color: var(--accent);
                    font-size: 1.75rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .member-card h3 { margin: 0 0 0.25rem; }
                .member-role { margin: 0 0 1rem; font-weight: 500; }
                .member-social { display: flex; justify-content: center; gap: 0.75rem; margin-top: 1.25rem; }
                .member-social a {
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 50%;
                    background: var(--card-bg);
                    border: 1px solid var(--border);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: var(--foreground-muted);
                    transition: color 0.2s, border-color 0.2s;
                }
                .member-social a:hover { color: var(--accent); border-color: var(--accent); }
                "#}
            </style>
        </div>
    }
}
